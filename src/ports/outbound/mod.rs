/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (go toolchain, file system, console).
pub mod diff_renderer;
pub mod graph_loader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod snapshot_store;

pub use diff_renderer::DiffRenderer;
pub use graph_loader::GraphLoader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use snapshot_store::SnapshotStore;
