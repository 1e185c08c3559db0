mod adapters;
mod application;
mod cli;
mod config;
mod dependency_audit;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::diff::UnifiedDiffRenderer;
use adapters::outbound::filesystem::{SnapshotFileStore, StdoutPresenter};
use adapters::outbound::golang::GoListLoader;
use application::dto::{AuditConfig, AuditRequest, SnapshotMode};
use application::use_cases::{AuditDependenciesUseCase, EnforceSnapshotUseCase, SnapshotOutcome};
use cli::Args;
use ports::outbound::OutputPresenter;
use shared::error::{AuditError, ExitCode};
use shared::Result;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "DEPAWARE_LOG";

fn main() {
    init_tracing();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            e.downcast_ref::<AuditError>()
                .map(AuditError::exit_code)
                .unwrap_or(ExitCode::ApplicationError)
        }
    };

    process::exit(exit_code.as_i32());
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    let loaded = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let audit_config = config::merge_config(&args, loaded)?;
    tracing::debug!(?audit_config, "resolved configuration");

    // Create adapters (Dependency Injection)
    let audit = AuditDependenciesUseCase::new(
        GoListLoader::new(),
        SnapshotFileStore::new(),
        StderrProgressReporter::with_visibility(audit_config.verbose),
    );
    let enforce = EnforceSnapshotUseCase::new(
        SnapshotFileStore::new(),
        StdoutPresenter::new(),
        UnifiedDiffRenderer::with_color(audit_config.color),
    );

    let roots = audit.resolve_roots(&args.packages, &audit_config.build_tags)?;
    process_roots(&audit_config, &roots, |root| {
        let response = audit.execute(&AuditRequest::from_config(root, &audit_config))?;
        enforce.execute(audit_config.mode, &response)
    })
}

/// Runs every root in order, stopping at the first drift or error
fn process_roots<F>(config: &AuditConfig, roots: &[String], mut audit_root: F) -> Result<ExitCode>
where
    F: FnMut(&str) -> Result<SnapshotOutcome>,
{
    let separator = StdoutPresenter::new();

    for (i, root) in roots.iter().enumerate() {
        if config.mode == SnapshotMode::Print && i > 0 {
            separator.present(b"\n")?;
        }

        match audit_root(root)? {
            SnapshotOutcome::Printed | SnapshotOutcome::UpToDate => {}
            SnapshotOutcome::Updated { path } => {
                if config.verbose {
                    eprintln!("📝 Wrote {}", path.display());
                }
            }
            SnapshotOutcome::Drifted { path, diff } => {
                eprint!(
                    "The list of dependencies in {} is out of date.\n\n{}",
                    path.display(),
                    diff
                );
                return Ok(ExitCode::DriftDetected);
            }
        }
    }

    Ok(ExitCode::Success)
}
