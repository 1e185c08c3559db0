use super::PackagePath;
use crate::dependency_audit::policies::PackageClassification;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Accumulates `importer -> imported` edges across target configurations
///
/// Each directed pair is stored once no matter how many targets observe it.
/// Importers of `unsafe` and `runtime/cgo` are flagged as they are seen.
#[derive(Debug, Clone, Default)]
pub struct EdgeAccumulator {
    imported_by: HashMap<PackagePath, BTreeSet<PackagePath>>,
    uses_unsafe: HashSet<PackagePath>,
    uses_cgo: HashSet<PackagePath>,
}

impl EdgeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `importer` imports `imported`. Both paths are canonicalized.
    pub fn record_edge(&mut self, importer: &str, imported: &str) {
        let importer = PackagePath::canonical(importer);
        let imported = PackagePath::canonical(imported);

        if PackageClassification::is_unsafe_marker(&imported) {
            self.uses_unsafe.insert(importer.clone());
        }
        if PackageClassification::is_cgo_marker(&imported) {
            self.uses_cgo.insert(importer.clone());
        }

        self.imported_by.entry(imported).or_default().insert(importer);
    }

    /// Distinct importers of `pkg`, in byte order
    pub fn importers_of(&self, pkg: &PackagePath) -> Option<&BTreeSet<PackagePath>> {
        self.imported_by.get(pkg)
    }

    pub fn uses_unsafe(&self, pkg: &PackagePath) -> bool {
        self.uses_unsafe.contains(pkg)
    }

    pub fn uses_cgo(&self, pkg: &PackagePath) -> bool {
        self.uses_cgo.contains(pkg)
    }

    pub fn edge_count(&self) -> usize {
        self.imported_by.values().map(BTreeSet::len).sum()
    }
}
