use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell drift apart from broken runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - snapshot printed, up to date, or updated
    Success = 0,
    /// The rendered dependencies differ from the committed snapshot
    DriftDetected = 1,
    /// Invalid command-line arguments or configuration
    InvalidArguments = 2,
    /// Application error (loader failure, missing snapshot, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DriftDetected => write!(f, "Drift Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency auditing.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Invalid argument: {argument}\nReason: {reason}\n\n💡 Hint: {hint}")]
    InvalidArgument {
        argument: String,
        reason: String,
        hint: String,
    },

    #[error("Invalid configuration: {path}\nReason: {reason}\n\n💡 Hint: Check the file against the documented config keys (goos, tags, internal, file, color)")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("Could not resolve packages: {details}\n\n💡 Hint: Run from inside a Go module, or pass import paths or patterns such as ./cmd/...")]
    RootResolution { details: String },

    #[error("Failed to load package {root} for GOOS={target}\nDetails: {details}")]
    LoaderFailed {
        root: String,
        target: String,
        details: String,
    },

    #[error("Package {root} is missing from the loaded graph for GOOS={target}")]
    RootNotLoaded { root: String, target: String },

    #[error("No .go files found for package {root}\n\n💡 Hint: The snapshot is stored next to the package sources, so the package must have at least one Go file")]
    NoSourceFiles { root: String },

    #[error("Snapshot not readable: {path}\nDetails: {details}\n\n💡 Hint: Run with --update to create the snapshot before using --check")]
    MissingBaseline { path: PathBuf, details: String },

    #[error("Failed to write snapshot: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    SnapshotWriteError { path: PathBuf, details: String },
}

impl AuditError {
    /// Maps the error onto the process exit code reported to CI.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AuditError::InvalidArgument { .. } | AuditError::InvalidConfig { .. } => {
                ExitCode::InvalidArguments
            }
            _ => ExitCode::ApplicationError,
        }
    }
}
