/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod audit_config;
mod audit_request;
mod audit_response;

pub use audit_config::{AuditConfig, SnapshotMode, DEFAULT_SNAPSHOT_FILE, DEFAULT_TARGETS};
pub use audit_request::AuditRequest;
pub use audit_response::AuditResponse;
