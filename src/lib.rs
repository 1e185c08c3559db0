//! depaware - dependency auditing for Go packages
//!
//! This library computes the transitive dependency set of a Go package across
//! several `GOOS` targets, renders it as a stable, reviewable text snapshot,
//! and compares it against the snapshot committed next to the package sources.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_audit`): Graph accumulation, classification, attribution, rendering
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depaware::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = AuditConfig::with_defaults()?;
//!
//! // Create use cases
//! let audit = AuditDependenciesUseCase::new(
//!     GoListLoader::new(),
//!     SnapshotFileStore::new(),
//!     StderrProgressReporter::hidden(),
//! );
//! let enforce = EnforceSnapshotUseCase::new(
//!     SnapshotFileStore::new(),
//!     StdoutPresenter::new(),
//!     UnifiedDiffRenderer::new(),
//! );
//!
//! // Audit every package under ./cmd and check its snapshot
//! for root in audit.resolve_roots(&["./cmd/...".to_string()], &[])? {
//!     let response = audit.execute(&AuditRequest::from_config(&root, &config))?;
//!     if let SnapshotOutcome::Drifted { diff, .. } = enforce.execute(SnapshotMode::Check, &response)? {
//!         eprintln!("{}", diff);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_audit;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::diff::UnifiedDiffRenderer;
    pub use crate::adapters::outbound::filesystem::{SnapshotFileStore, StdoutPresenter};
    pub use crate::adapters::outbound::golang::GoListLoader;
    pub use crate::application::dto::{
        AuditConfig, AuditRequest, AuditResponse, SnapshotMode, DEFAULT_SNAPSHOT_FILE,
    };
    pub use crate::application::use_cases::{
        AuditDependenciesUseCase, EnforceSnapshotUseCase, SnapshotOutcome,
    };
    pub use crate::dependency_audit::domain::{
        DependencyGraph, GraphNode, PackagePath, PreferredWhy, TargetConfig, UnitGraph,
    };
    pub use crate::dependency_audit::policies::{PackageClassification, SnapshotOrdering};
    pub use crate::dependency_audit::services::{AttributionResolver, SnapshotRenderer, GENERATOR_ID};
    pub use crate::ports::outbound::{
        DiffRenderer, GraphLoader, OutputPresenter, ProgressReporter, SnapshotStore,
    };
    pub use crate::shared::error::{AuditError, ExitCode};
    pub use crate::shared::Result;
}
