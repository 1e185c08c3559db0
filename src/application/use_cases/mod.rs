/// Use cases module containing application business logic orchestration
mod audit_dependencies;
mod enforce_snapshot;

pub use audit_dependencies::AuditDependenciesUseCase;
pub use enforce_snapshot::{EnforceSnapshotUseCase, SnapshotOutcome};
