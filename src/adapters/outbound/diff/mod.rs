/// Line diff rendering for drift reports
mod unified_diff_renderer;

pub use unified_diff_renderer::UnifiedDiffRenderer;
