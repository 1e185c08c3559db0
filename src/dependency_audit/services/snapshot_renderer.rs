use super::AttributionResolver;
use crate::dependency_audit::domain::{DependencyGraph, PackagePath, PreferredWhy};
use crate::dependency_audit::policies::{PackageClassification, SnapshotOrdering};

/// Generator marker written into every snapshot header. Kept identical to the
/// established format so existing snapshots compare byte-for-byte.
pub const GENERATOR_ID: &str = "github.com/tailscale/depaware";

/// SnapshotRenderer service producing the canonical snapshot text
///
/// Output is a function of the graph contents only: dependencies are sorted
/// with [`SnapshotOrdering`] and importer sets are already ordered, so neither
/// target order nor edge observation order can leak into the bytes.
pub struct SnapshotRenderer;

impl SnapshotRenderer {
    const TARGET_COLUMN_WIDTH: usize = 3;
    const PATH_COLUMN_WIDTH: usize = 60;

    pub fn render(graph: &DependencyGraph, hints: &PreferredWhy) -> String {
        let mut out = format!("{} dependencies: (generated by {})\n\n", graph.root(), GENERATOR_ID);

        let mut dependencies: Vec<&PackagePath> = graph.dependencies().iter().collect();
        SnapshotOrdering::sort(&mut dependencies);

        for pkg in dependencies {
            Self::render_line(&mut out, graph, pkg, hints);
        }

        out
    }

    fn render_line(out: &mut String, graph: &DependencyGraph, pkg: &PackagePath, hints: &PreferredWhy) {
        let is_standard = PackageClassification::is_standard(pkg);
        let unsafe_icon = if graph.edges().uses_unsafe(pkg) && !is_standard {
            'U'
        } else {
            ' '
        };
        let cgo_icon = if graph.edges().uses_cgo(pkg) && !is_standard {
            'C'
        } else {
            ' '
        };

        let markers = graph.dependencies().target_markers(pkg, graph.targets());
        let candidates = graph.attribution_candidates(pkg);
        let why = AttributionResolver::attribute(&candidates, hints.get(pkg))
            .map(|attribution| attribution.to_string())
            .unwrap_or_default();

        out.push_str(&format!(
            " {:>tw$} {}{} {:<pw$} {}\n",
            markers,
            unsafe_icon,
            cgo_icon,
            pkg.as_str(),
            why,
            tw = Self::TARGET_COLUMN_WIDTH,
            pw = Self::PATH_COLUMN_WIDTH,
        ));
    }
}
