use crate::shared::Result;
use std::path::Path;

/// SnapshotStore port for reading and writing committed snapshot files
pub trait SnapshotStore {
    /// Reads the raw snapshot bytes
    ///
    /// # Errors
    /// Returns an error if the snapshot does not exist or cannot be read
    fn read_snapshot(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replaces the snapshot with `contents`, creating it if absent
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    fn write_snapshot(&self, path: &Path, contents: &[u8]) -> Result<()>;
}
