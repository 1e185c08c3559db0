use crate::application::dto::{AuditResponse, SnapshotMode};
use crate::ports::outbound::{DiffRenderer, OutputPresenter, SnapshotStore};
use crate::shared::error::AuditError;
use crate::shared::Result;
use std::path::PathBuf;

/// Result of applying a snapshot mode to a rendered snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotOutcome {
    /// Rendering written to the output presenter
    Printed,
    /// Committed snapshot matches byte-for-byte
    UpToDate,
    /// Committed snapshot replaced
    Updated { path: PathBuf },
    /// Committed snapshot differs; nothing was written
    Drifted { path: PathBuf, diff: String },
}

/// EnforceSnapshotUseCase - Drift detector and snapshot writer
///
/// The only part of the pipeline that looks at the run mode.
///
/// # Type Parameters
/// * `SS` - SnapshotStore implementation
/// * `OP` - OutputPresenter implementation
/// * `DR` - DiffRenderer implementation
pub struct EnforceSnapshotUseCase<SS, OP, DR> {
    snapshot_store: SS,
    output_presenter: OP,
    diff_renderer: DR,
}

impl<SS, OP, DR> EnforceSnapshotUseCase<SS, OP, DR>
where
    SS: SnapshotStore,
    OP: OutputPresenter,
    DR: DiffRenderer,
{
    pub fn new(snapshot_store: SS, output_presenter: OP, diff_renderer: DR) -> Self {
        Self {
            snapshot_store,
            output_presenter,
            diff_renderer,
        }
    }

    /// Applies `mode` to the rendered snapshot in `response`
    ///
    /// # Errors
    /// - Check mode: the committed snapshot cannot be read
    /// - Update mode: the snapshot cannot be written
    /// - Print mode: the output presenter fails
    pub fn execute(&self, mode: SnapshotMode, response: &AuditResponse) -> Result<SnapshotOutcome> {
        match mode {
            SnapshotMode::Print => {
                self.output_presenter.present(response.rendered.as_bytes())?;
                Ok(SnapshotOutcome::Printed)
            }
            SnapshotMode::Check => self.check(response),
            SnapshotMode::Update => self.update(response),
        }
    }

    fn check(&self, response: &AuditResponse) -> Result<SnapshotOutcome> {
        let committed = self
            .snapshot_store
            .read_snapshot(&response.snapshot_path)
            .map_err(|e| AuditError::MissingBaseline {
                path: response.snapshot_path.clone(),
                details: format!("{:#}", e),
            })?;

        let rendered = response.rendered.as_bytes();
        if committed == rendered {
            tracing::debug!(path = %response.snapshot_path.display(), "snapshot up to date");
            return Ok(SnapshotOutcome::UpToDate);
        }

        tracing::debug!(path = %response.snapshot_path.display(), "snapshot drifted");
        let diff = self.diff_renderer.render("before", "after", &committed, rendered);
        Ok(SnapshotOutcome::Drifted {
            path: response.snapshot_path.clone(),
            diff,
        })
    }

    fn update(&self, response: &AuditResponse) -> Result<SnapshotOutcome> {
        self.snapshot_store
            .write_snapshot(&response.snapshot_path, response.rendered.as_bytes())
            .map_err(|e| AuditError::SnapshotWriteError {
                path: response.snapshot_path.clone(),
                details: format!("{:#}", e),
            })?;

        tracing::debug!(path = %response.snapshot_path.display(), "snapshot updated");
        Ok(SnapshotOutcome::Updated {
            path: response.snapshot_path.clone(),
        })
    }
}
