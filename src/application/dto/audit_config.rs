use crate::dependency_audit::domain::TargetConfig;
use crate::shared::Result;

/// Snapshot file name used when neither the CLI nor the config file names one
pub const DEFAULT_SNAPSHOT_FILE: &str = "depaware.txt";

/// Target configurations audited when none are given
pub const DEFAULT_TARGETS: &str = "linux,darwin,windows";

/// What to do with the rendered snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotMode {
    /// Write the rendering to stdout
    #[default]
    Print,
    /// Compare against the committed snapshot and report drift
    Check,
    /// Overwrite the committed snapshot
    Update,
}

/// AuditConfig - Immutable run configuration
///
/// Built once at the process boundary from CLI flags and the optional config
/// file, then passed down explicitly. Nothing below `main` reads global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    pub mode: SnapshotMode,
    pub snapshot_file_name: String,
    pub targets: Vec<TargetConfig>,
    pub build_tags: Vec<String>,
    pub include_internal: bool,
    /// Colour the drift diff
    pub color: bool,
    /// Show progress on stderr
    pub verbose: bool,
}

impl AuditConfig {
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            mode: SnapshotMode::default(),
            snapshot_file_name: DEFAULT_SNAPSHOT_FILE.to_string(),
            targets: TargetConfig::parse_list(DEFAULT_TARGETS)?,
            build_tags: Vec::new(),
            include_internal: false,
            color: false,
            verbose: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuditConfig::with_defaults().unwrap();
        assert_eq!(config.mode, SnapshotMode::Print);
        assert_eq!(config.snapshot_file_name, "depaware.txt");
        let targets: Vec<&str> = config.targets.iter().map(TargetConfig::as_str).collect();
        assert_eq!(targets, vec!["linux", "darwin", "windows"]);
        assert!(config.build_tags.is_empty());
        assert!(!config.include_internal);
    }
}
