use std::collections::HashMap;
use std::path::PathBuf;

/// One package as reported by a loader for a single target configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    /// Import path exactly as the loader reported it (possibly vendored)
    pub path: String,
    /// Import paths this package imports directly
    pub imports: Vec<String>,
    /// Directory holding the package's Go files, if it has any
    pub source_dir: Option<PathBuf>,
}

impl GraphNode {
    pub fn new<I, S>(path: impl Into<String>, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into(),
            imports: imports.into_iter().map(Into::into).collect(),
            source_dir: None,
        }
    }

    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = Some(dir.into());
        self
    }
}

/// Structural graph of a root package under one target configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitGraph {
    nodes: Vec<GraphNode>,
}

impl UnitGraph {
    pub fn new(nodes: Vec<GraphNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Index of nodes by their reported path. A repeated path keeps its first node.
    pub fn index(&self) -> HashMap<&str, &GraphNode> {
        let mut index = HashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            index.entry(node.path.as_str()).or_insert(node);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_keeps_first_duplicate() {
        let graph = UnitGraph::new(vec![
            GraphNode::new("a", ["b"]),
            GraphNode::new("a", ["c"]),
        ]);
        let index = graph.index();
        assert_eq!(index.len(), 1);
        assert_eq!(index["a"].imports, vec!["b".to_string()]);
    }

    #[test]
    fn test_with_source_dir() {
        let node = GraphNode::new("example.com/app", Vec::<String>::new()).with_source_dir("/src/app");
        assert_eq!(node.source_dir, Some(PathBuf::from("/src/app")));
        assert!(node.imports.is_empty());
    }
}
