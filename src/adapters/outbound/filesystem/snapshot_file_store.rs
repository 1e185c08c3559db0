use crate::ports::outbound::SnapshotStore;
use crate::shared::security::{validate_not_symlink, validate_regular_file, MAX_SNAPSHOT_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// SnapshotFileStore adapter for snapshot files on the local file system
pub struct SnapshotFileStore;

impl SnapshotFileStore {
    pub fn new() -> Self {
        Self
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                anyhow::bail!("Parent directory does not exist: {}", parent.display());
            }
        }
        Ok(())
    }
}

impl Default for SnapshotFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for SnapshotFileStore {
    fn read_snapshot(&self, path: &Path) -> Result<Vec<u8>> {
        validate_regular_file(path, "snapshot", MAX_SNAPSHOT_SIZE)?;
        fs::read(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
    }

    fn write_snapshot(&self, path: &Path, contents: &[u8]) -> Result<()> {
        Self::validate_parent_directory(path)?;
        validate_not_symlink(path, "write")?;

        fs::write(path, contents)
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))
    }
}
