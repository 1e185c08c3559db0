use crate::application::dto::{AuditRequest, AuditResponse};
use crate::dependency_audit::domain::{DependencyGraph, PreferredWhy};
use crate::dependency_audit::services::SnapshotRenderer;
use crate::ports::outbound::{GraphLoader, ProgressReporter, SnapshotStore};
use crate::shared::error::AuditError;
use crate::shared::Result;
use std::path::Path;

/// AuditDependenciesUseCase - Core use case for computing a package's snapshot
///
/// Runs the linear pipeline `load every target -> accumulate -> attribute -> render`
/// for one root package. Infrastructure is injected through generics.
///
/// # Type Parameters
/// * `GL` - GraphLoader implementation
/// * `SS` - SnapshotStore implementation (only read, for attribution hints)
/// * `PR` - ProgressReporter implementation
pub struct AuditDependenciesUseCase<GL, SS, PR> {
    graph_loader: GL,
    snapshot_store: SS,
    progress_reporter: PR,
}

impl<GL, SS, PR> AuditDependenciesUseCase<GL, SS, PR>
where
    GL: GraphLoader,
    SS: SnapshotStore,
    PR: ProgressReporter,
{
    /// Creates a new AuditDependenciesUseCase with injected dependencies
    pub fn new(graph_loader: GL, snapshot_store: SS, progress_reporter: PR) -> Self {
        Self {
            graph_loader,
            snapshot_store,
            progress_reporter,
        }
    }

    /// Resolves command-line package patterns into root import paths
    ///
    /// # Errors
    /// Returns an error if the loader cannot resolve the patterns, or if a
    /// resolved path looks like a misplaced flag
    pub fn resolve_roots(&self, patterns: &[String], build_tags: &[String]) -> Result<Vec<String>> {
        let roots = self
            .graph_loader
            .resolve_roots(patterns, build_tags)
            .map_err(|e| AuditError::RootResolution {
                details: format!("{:#}", e),
            })?;

        if let Some(bogus) = roots.iter().find(|root| root.starts_with('-')) {
            return Err(AuditError::InvalidArgument {
                argument: bogus.clone(),
                reason: "bogus package argument".to_string(),
                hint: "Flags go before packages".to_string(),
            }
            .into());
        }

        tracing::debug!(count = roots.len(), "resolved root packages");
        Ok(roots)
    }

    /// Executes the audit for one root package
    ///
    /// # Returns
    /// AuditResponse with the rendered snapshot and where it is stored
    ///
    /// # Errors
    /// Fails fast if any target cannot be loaded; no partial result is returned
    pub fn execute(&self, request: &AuditRequest) -> Result<AuditResponse> {
        let graph = self.load_all_targets(request)?;

        let source_dir = graph.source_dir().ok_or_else(|| AuditError::NoSourceFiles {
            root: request.root.clone(),
        })?;
        let snapshot_path = source_dir.join(&request.snapshot_file_name);

        let hints = self.load_previous_attributions(&snapshot_path);
        let rendered = SnapshotRenderer::render(&graph, &hints);

        tracing::debug!(
            root = %request.root,
            dependencies = graph.dependency_count(),
            edges = graph.edges().edge_count(),
            "rendered snapshot"
        );

        Ok(AuditResponse::new(
            request.root.clone(),
            snapshot_path,
            rendered,
            graph.dependency_count(),
        ))
    }

    /// Loads the root under every target configuration and folds the results together
    fn load_all_targets(&self, request: &AuditRequest) -> Result<DependencyGraph> {
        let mut graph = DependencyGraph::new(
            request.root.clone(),
            request.targets.clone(),
            request.include_internal,
        );
        let total = request.targets.len();
        self.progress_reporter
            .report(&format!("🔍 Auditing {} for {} target(s)...", request.root, total));

        for (i, target) in request.targets.iter().enumerate() {
            self.progress_reporter.report_progress(
                i,
                total,
                Some(&format!("{} (GOOS={})", request.root, target)),
            );

            let unit_graph = self
                .graph_loader
                .load_graph(&request.root, target, &request.build_tags)
                .map_err(|e| {
                    self.progress_reporter
                        .report_error(&format!("❌ Loading failed for GOOS={}", target));
                    AuditError::LoaderFailed {
                        root: request.root.clone(),
                        target: target.to_string(),
                        details: format!("{:#}", e),
                    }
                })?;

            let visited = graph.record_target(target, &unit_graph)?;
            tracing::debug!(
                root = %request.root,
                target = %target,
                nodes = unit_graph.node_count(),
                visited,
                "recorded target graph"
            );
        }

        self.progress_reporter.report_completion(&format!(
            "✅ {}: {} dependencies across {} target(s)",
            request.root,
            graph.dependency_count(),
            total
        ));

        Ok(graph)
    }

    /// Reads attribution hints from the committed snapshot, if there is one.
    /// An unreadable snapshot just means there is nothing to stay consistent with.
    fn load_previous_attributions(&self, snapshot_path: &Path) -> PreferredWhy {
        match self.snapshot_store.read_snapshot(snapshot_path) {
            Ok(contents) => {
                let hints = PreferredWhy::parse(&contents);
                tracing::trace!(path = %snapshot_path.display(), hints = hints.len(), "parsed previous snapshot");
                hints
            }
            Err(e) => {
                tracing::trace!(path = %snapshot_path.display(), error = %e, "no previous snapshot");
                PreferredWhy::empty()
            }
        }
    }
}
