use crate::dependency_audit::domain::{GraphNode, TargetConfig, UnitGraph};
use crate::ports::outbound::GraphLoader;
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Architecture used for every target; only GOOS varies between runs.
const GOARCH: &str = "amd64";

/// Subset of the `go list -json` package record the loader needs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GoListPackage {
    import_path: String,
    #[serde(default)]
    dir: Option<PathBuf>,
    #[serde(default)]
    go_files: Vec<String>,
    #[serde(default)]
    imports: Vec<String>,
    /// Set by `-e` when the package itself could not be loaded
    #[serde(default)]
    error: Option<GoListError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GoListError {
    err: String,
}

impl From<GoListPackage> for GraphNode {
    fn from(pkg: GoListPackage) -> Self {
        let node = GraphNode::new(pkg.import_path, pkg.imports);
        match pkg.dir {
            Some(dir) if !pkg.go_files.is_empty() => node.with_source_dir(dir),
            _ => node,
        }
    }
}

/// GoListLoader adapter backed by the `go list` command
///
/// Each target is loaded with its own `GOOS` so that build constraints
/// are applied by the Go toolchain itself. cgo stays enabled and `-compiled`
/// is passed, so a package importing `"C"` reports `runtime/cgo` and
/// `unsafe` in its imports.
///
/// `-e` keeps per-package errors in the output instead of failing the
/// whole load. A root excluded by build constraints under one `GOOS` then
/// simply contributes nothing for that target. Only a non-zero exit, which
/// `go list -e` reserves for errors it cannot attach to a package, fails.
pub struct GoListLoader {
    go_binary: PathBuf,
}

impl GoListLoader {
    pub fn new() -> Self {
        Self {
            go_binary: PathBuf::from("go"),
        }
    }

    pub fn with_binary(go_binary: impl Into<PathBuf>) -> Self {
        Self {
            go_binary: go_binary.into(),
        }
    }

    fn tags_args(build_tags: &[String]) -> Vec<String> {
        if build_tags.is_empty() {
            Vec::new()
        } else {
            vec!["-tags".to_string(), build_tags.join(",")]
        }
    }

    fn graph_command(&self, root: &str, target: &TargetConfig, build_tags: &[String]) -> Command {
        let mut command = Command::new(&self.go_binary);
        command
            .args(["list", "-e", "-compiled", "-deps", "-json"])
            .args(Self::tags_args(build_tags))
            .arg("--")
            .arg(root)
            .env("GOOS", target.as_str())
            .env("GOARCH", GOARCH)
            .env("CGO_ENABLED", "1");
        command
    }

    fn run(&self, mut command: Command, what: &str) -> Result<Output> {
        tracing::trace!(?command, "spawning go list");
        let output = command.output().with_context(|| {
            format!(
                "Failed to run '{}' for {}; is the Go toolchain installed and on PATH?",
                self.go_binary.display(),
                what
            )
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "go list exited with {} for {}:\n{}",
                output.status,
                what,
                stderr.trim_end()
            );
        }
        Ok(output)
    }
}

impl Default for GoListLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphLoader for GoListLoader {
    fn resolve_roots(&self, patterns: &[String], build_tags: &[String]) -> Result<Vec<String>> {
        let mut command = Command::new(&self.go_binary);
        command
            .arg("list")
            .args(Self::tags_args(build_tags))
            .arg("--")
            .args(patterns);

        let output = self.run(command, "package patterns")?;
        Ok(parse_import_paths(&output.stdout))
    }

    fn load_graph(&self, root: &str, target: &TargetConfig, build_tags: &[String]) -> Result<UnitGraph> {
        let command = self.graph_command(root, target, build_tags);

        let what = format!("{} (GOOS={})", root, target);
        let output = self.run(command, &what)?;
        let graph = parse_go_list_output(&output.stdout)
            .with_context(|| format!("Failed to parse go list output for {}", what))?;

        tracing::debug!(root, target = %target, packages = graph.node_count(), "loaded graph");
        Ok(graph)
    }
}

/// One import path per non-empty line
fn parse_import_paths(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses the concatenated JSON objects printed by `go list -json`
fn parse_go_list_output(stdout: &[u8]) -> Result<UnitGraph> {
    let nodes = serde_json::Deserializer::from_slice(stdout)
        .into_iter::<GoListPackage>()
        .map(|pkg| {
            pkg.map(|pkg| {
                if let Some(error) = &pkg.error {
                    tracing::debug!(package = %pkg.import_path, error = %error.err, "package loaded with errors");
                }
                GraphNode::from(pkg)
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(UnitGraph::new(nodes))
}
