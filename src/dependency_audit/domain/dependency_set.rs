use super::{PackagePath, TargetConfig};
use crate::dependency_audit::policies::PackageClassification;
use std::collections::{BTreeMap, BTreeSet};

/// The set of packages counted as dependencies of a root package, with the
/// target configurations each one was observed under
#[derive(Debug, Clone, Default)]
pub struct DependencySet {
    include_internal: bool,
    targets_by_dependency: BTreeMap<PackagePath, BTreeSet<TargetConfig>>,
}

impl DependencySet {
    pub fn new(include_internal: bool) -> Self {
        Self {
            include_internal,
            targets_by_dependency: BTreeMap::new(),
        }
    }

    /// Records `pkg` as a dependency seen under `target`.
    ///
    /// Internal packages are dropped unless the set was built to include them.
    /// Returns whether the package was kept.
    pub fn record_dependency(&mut self, pkg: &str, target: &TargetConfig) -> bool {
        let pkg = PackagePath::canonical(pkg);
        if !self.include_internal && PackageClassification::is_internal(&pkg) {
            return false;
        }
        self.targets_by_dependency
            .entry(pkg)
            .or_default()
            .insert(target.clone());
        true
    }

    pub fn contains(&self, pkg: &PackagePath) -> bool {
        self.targets_by_dependency.contains_key(pkg)
    }

    pub fn is_seen_under(&self, pkg: &PackagePath, target: &TargetConfig) -> bool {
        self.targets_by_dependency
            .get(pkg)
            .is_some_and(|targets| targets.contains(target))
    }

    /// Marker column text: one letter per target in `all_targets` order, or
    /// blank when the dependency was seen under every one of them
    pub fn target_markers(&self, pkg: &PackagePath, all_targets: &[TargetConfig]) -> String {
        let markers: String = all_targets
            .iter()
            .filter(|target| self.is_seen_under(pkg, target))
            .map(TargetConfig::marker)
            .collect();
        if markers.chars().count() == all_targets.len() {
            String::new()
        } else {
            markers
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PackagePath> {
        self.targets_by_dependency.keys()
    }

    pub fn len(&self) -> usize {
        self.targets_by_dependency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets_by_dependency.is_empty()
    }
}
