use super::PackageClassification;
use crate::dependency_audit::domain::PackagePath;
use std::cmp::Ordering;

/// SnapshotOrdering policy for the line order of a rendered snapshot
///
/// Priority order:
/// 1. Standard library paths (no `.`)
/// 2. `golang.org/x/` paths
/// 3. Everything else
///
/// Ties within a group are broken by byte order of the path, which makes the
/// ordering total over distinct paths.
pub struct SnapshotOrdering;

impl SnapshotOrdering {
    pub fn compare(a: &PackagePath, b: &PackagePath) -> Ordering {
        Self::group(a)
            .cmp(&Self::group(b))
            .then_with(|| a.as_str().cmp(b.as_str()))
    }

    /// Sorts paths in place into snapshot order
    pub fn sort(paths: &mut [&PackagePath]) {
        paths.sort_by(|a, b| Self::compare(a, b));
    }

    fn group(pkg: &PackagePath) -> u8 {
        if !PackageClassification::has_namespace_separator(pkg) {
            0
        } else if PackageClassification::is_extended_standard(pkg) {
            1
        } else {
            2
        }
    }
}
