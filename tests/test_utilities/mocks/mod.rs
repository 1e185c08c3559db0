/// Mock implementations for testing
mod mock_graph_loader;
mod mock_progress_reporter;
mod mock_snapshot_store;

pub use mock_graph_loader::MockGraphLoader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_snapshot_store::MockSnapshotStore;
