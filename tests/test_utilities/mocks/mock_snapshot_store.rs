use depaware::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock SnapshotStore backed by an in-memory map
///
/// Clones share the same map, so the audit and enforce use cases can be
/// handed separate instances that see each other's writes.
#[derive(Default, Clone)]
pub struct MockSnapshotStore {
    pub snapshots: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
}

impl MockSnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<PathBuf>, contents: &[u8]) {
        self.snapshots
            .lock()
            .unwrap()
            .insert(path.into(), contents.to_vec());
    }

    pub fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.snapshots.lock().unwrap().get(path).cloned()
    }
}

impl SnapshotStore for MockSnapshotStore {
    fn read_snapshot(&self, path: &Path) -> Result<Vec<u8>> {
        self.get(path)
            .ok_or_else(|| anyhow::anyhow!("No such file or directory: {}", path.display()))
    }

    fn write_snapshot(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.insert(path, contents);
        Ok(())
    }
}
