use super::{DependencySet, EdgeAccumulator, PackagePath, TargetConfig, UnitGraph};
use crate::shared::error::AuditError;
use crate::shared::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// DependencyGraph aggregate for one root package across all target configurations
///
/// Loaded graphs are folded in one target at a time. Only nodes reachable from
/// the root are visited, so every recorded edge belongs to the root's own
/// transitive closure.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    root: String,
    targets: Vec<TargetConfig>,
    edges: EdgeAccumulator,
    dependencies: DependencySet,
    source_dir: Option<PathBuf>,
}

impl DependencyGraph {
    pub fn new(root: impl Into<String>, targets: Vec<TargetConfig>, include_internal: bool) -> Self {
        Self {
            root: root.into(),
            targets,
            edges: EdgeAccumulator::new(),
            dependencies: DependencySet::new(include_internal),
            source_dir: None,
        }
    }

    /// Folds in the graph loaded for `target`, returning the number of visited nodes
    ///
    /// # Errors
    /// Returns an error if the loaded graph does not contain the root package
    pub fn record_target(&mut self, target: &TargetConfig, graph: &UnitGraph) -> Result<usize> {
        let index = graph.index();
        let root = self.root.clone();
        if !index.contains_key(root.as_str()) {
            return Err(AuditError::RootNotLoaded {
                root,
                target: target.to_string(),
            }
            .into());
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = vec![root.as_str()];

        while let Some(path) = stack.pop() {
            if !visited.insert(path) {
                continue;
            }

            // Imports the loader did not return a node for are visited as leaves.
            if let Some(node) = index.get(path) {
                for import in &node.imports {
                    self.edges.record_edge(path, import);
                    if !visited.contains(import.as_str()) {
                        stack.push(import.as_str());
                    }
                }
                if path == root {
                    if self.source_dir.is_none() {
                        self.source_dir = node.source_dir.clone();
                    }
                    continue;
                }
            }

            self.dependencies.record_dependency(path, target);
        }

        Ok(visited.len())
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn targets(&self) -> &[TargetConfig] {
        &self.targets
    }

    pub fn edges(&self) -> &EdgeAccumulator {
        &self.edges
    }

    pub fn dependencies(&self) -> &DependencySet {
        &self.dependencies
    }

    /// Directory of the root package's Go files, from the first target that had any
    pub fn source_dir(&self) -> Option<&Path> {
        self.source_dir.as_deref()
    }

    /// Importers of `pkg` that may explain why it is present, in byte order.
    /// The root package itself never counts as an explanation.
    pub fn attribution_candidates(&self, pkg: &PackagePath) -> Vec<&PackagePath> {
        let root = PackagePath::canonical(&self.root);
        self.edges
            .importers_of(pkg)
            .map(|importers| importers.iter().filter(|p| **p != root).collect())
            .unwrap_or_default()
    }

    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }
}
