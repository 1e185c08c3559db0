pub mod package_classification;
pub mod snapshot_ordering;

pub use package_classification::PackageClassification;
pub use snapshot_ordering::SnapshotOrdering;
