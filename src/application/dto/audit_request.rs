use super::AuditConfig;
use crate::dependency_audit::domain::TargetConfig;

/// AuditRequest - Request DTO for auditing a single root package
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// Import path of the package being audited
    pub root: String,
    /// Target configurations to load, in column order
    pub targets: Vec<TargetConfig>,
    /// Build tags passed through to the loader
    pub build_tags: Vec<String>,
    /// Keep internal packages in the dependency set
    pub include_internal: bool,
    /// File name of the snapshot inside the package directory
    pub snapshot_file_name: String,
}

impl AuditRequest {
    pub fn new(
        root: String,
        targets: Vec<TargetConfig>,
        build_tags: Vec<String>,
        include_internal: bool,
        snapshot_file_name: String,
    ) -> Self {
        Self {
            root,
            targets,
            build_tags,
            include_internal,
            snapshot_file_name,
        }
    }

    pub fn from_config(root: &str, config: &AuditConfig) -> Self {
        Self::new(
            root.to_string(),
            config.targets.clone(),
            config.build_tags.clone(),
            config.include_internal,
            config.snapshot_file_name.clone(),
        )
    }
}
