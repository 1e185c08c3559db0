use crate::dependency_audit::domain::{TargetConfig, UnitGraph};
use crate::shared::Result;

/// GraphLoader port for resolving packages into import graphs
///
/// This port abstracts the build tool that knows how a package's imports
/// resolve under a given target configuration.
pub trait GraphLoader {
    /// Resolves package patterns (e.g. `./cmd/...`) into import paths
    ///
    /// An empty pattern list means the package in the current directory.
    ///
    /// # Errors
    /// Returns an error if the patterns cannot be resolved
    fn resolve_roots(&self, patterns: &[String], build_tags: &[String]) -> Result<Vec<String>>;

    /// Loads the transitive import graph of `root` under `target`
    ///
    /// # Returns
    /// Every package reachable from `root`, including `root` itself
    ///
    /// # Errors
    /// Returns an error if the package or any of its imports cannot be loaded
    fn load_graph(&self, root: &str, target: &TargetConfig, build_tags: &[String]) -> Result<UnitGraph>;
}
