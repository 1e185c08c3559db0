/// Filesystem adapters for snapshot I/O and stdout output
mod snapshot_file_store;
mod stdout_presenter;

pub use snapshot_file_store::SnapshotFileStore;
pub use stdout_presenter::StdoutPresenter;
