use depaware::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

/// Mock GraphLoader serving canned graphs per target configuration
///
/// Nodes built with [`MockGraphLoader::node`] get a source directory under
/// `/src`, so snapshots land at a predictable path.
#[derive(Default, Clone)]
pub struct MockGraphLoader {
    graphs: HashMap<String, UnitGraph>,
    roots: Vec<String>,
    failing_target: Option<String>,
}

impl MockGraphLoader {
    pub fn new(roots: &[&str]) -> Self {
        Self {
            roots: roots.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn with_graph(mut self, target: &str, nodes: Vec<GraphNode>) -> Self {
        self.graphs.insert(target.to_string(), UnitGraph::new(nodes));
        self
    }

    pub fn node(path: &str, imports: &[&str]) -> GraphNode {
        GraphNode::new(path, imports.iter().copied()).with_source_dir(Self::source_dir(path))
    }

    pub fn with_failing_target(mut self, target: &str) -> Self {
        self.failing_target = Some(target.to_string());
        self
    }

    /// Directory the mock reports for `path`
    pub fn source_dir(path: &str) -> PathBuf {
        PathBuf::from("/src").join(path)
    }
}

impl GraphLoader for MockGraphLoader {
    fn resolve_roots(&self, _patterns: &[String], _build_tags: &[String]) -> Result<Vec<String>> {
        Ok(self.roots.clone())
    }

    fn load_graph(&self, root: &str, target: &TargetConfig, _build_tags: &[String]) -> Result<UnitGraph> {
        if self.failing_target.as_deref() == Some(target.as_str()) {
            anyhow::bail!("build constraints exclude all Go files in {}", root);
        }
        self.graphs
            .get(target.as_str())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no graph for GOOS={}", target))
    }
}
