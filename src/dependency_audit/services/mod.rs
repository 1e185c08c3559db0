mod attribution_resolver;
mod snapshot_renderer;

pub use attribution_resolver::{Attribution, AttributionResolver};
pub use snapshot_renderer::{SnapshotRenderer, GENERATOR_ID};
