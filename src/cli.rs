use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::SnapshotMode;

/// Audit the transitive dependencies of Go packages against a committed snapshot
#[derive(Parser, Debug)]
#[command(name = "depaware")]
#[command(version = "0.1.0")]
#[command(
    about = "Audit the transitive dependencies of Go packages against a committed snapshot",
    long_about = None
)]
pub struct Args {
    /// Fail if the committed snapshot is out of date
    #[arg(long, conflicts_with = "update")]
    pub check: bool,

    /// Rewrite the committed snapshot
    #[arg(long)]
    pub update: bool,

    /// Snapshot file name inside each package directory [default: depaware.txt]
    #[arg(long, value_name = "NAME")]
    pub file: Option<String>,

    /// Comma-separated GOOS values to audit [default: linux,darwin,windows]
    #[arg(long, value_name = "LIST")]
    pub goos: Option<String>,

    /// Comma-separated build tags passed to the Go toolchain
    #[arg(long, value_name = "LIST")]
    pub tags: Option<String>,

    /// Include internal packages in the snapshot
    #[arg(long)]
    pub internal: bool,

    /// Path to a config file (defaults to ./depaware.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Colour the diff printed by --check
    #[arg(long)]
    pub color: bool,

    /// Show progress on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Packages or patterns to audit (defaults to the package in the current directory)
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn mode(&self) -> SnapshotMode {
        if self.check {
            SnapshotMode::Check
        } else if self.update {
            SnapshotMode::Update
        } else {
            SnapshotMode::Print
        }
    }

    /// Build tags split on commas, empty entries dropped
    pub fn build_tags(&self) -> Option<Vec<String>> {
        self.tags.as_deref().map(|tags| {
            tags.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("depaware").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_to_print_mode() {
        let args = parse(&[]);
        assert_eq!(args.mode(), SnapshotMode::Print);
        assert!(args.packages.is_empty());
        assert!(args.goos.is_none());
        assert!(args.build_tags().is_none());
    }

    #[test]
    fn test_check_mode() {
        let args = parse(&["--check", "./cmd/app"]);
        assert_eq!(args.mode(), SnapshotMode::Check);
        assert_eq!(args.packages, vec!["./cmd/app"]);
    }

    #[test]
    fn test_update_mode() {
        assert_eq!(parse(&["--update"]).mode(), SnapshotMode::Update);
    }

    #[test]
    fn test_check_and_update_conflict() {
        let result = Args::try_parse_from(["depaware", "--check", "--update"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_tags_split() {
        let args = parse(&["--tags", "netgo, osusergo,,"]);
        assert_eq!(
            args.build_tags(),
            Some(vec!["netgo".to_string(), "osusergo".to_string()])
        );
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&[
            "--file",
            "deps.txt",
            "--goos",
            "linux,freebsd",
            "--internal",
            "--color",
            "-v",
            "--config",
            "ci/depaware.yml",
            "example.com/a",
            "example.com/b",
        ]);
        assert_eq!(args.file.as_deref(), Some("deps.txt"));
        assert_eq!(args.goos.as_deref(), Some("linux,freebsd"));
        assert!(args.internal);
        assert!(args.color);
        assert!(args.verbose);
        assert_eq!(args.config, Some(PathBuf::from("ci/depaware.yml")));
        assert_eq!(args.packages, vec!["example.com/a", "example.com/b"]);
    }
}
