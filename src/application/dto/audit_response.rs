use std::path::PathBuf;

/// AuditResponse - Response DTO carrying the rendered snapshot for one root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditResponse {
    /// Import path of the audited package
    pub root: String,
    /// Where the committed snapshot for this package lives
    pub snapshot_path: PathBuf,
    /// Canonical snapshot text
    pub rendered: String,
    /// Number of dependency lines in `rendered`
    pub dependency_count: usize,
}

impl AuditResponse {
    pub fn new(root: String, snapshot_path: PathBuf, rendered: String, dependency_count: usize) -> Self {
        Self {
            root,
            snapshot_path,
            rendered,
            dependency_count,
        }
    }
}
