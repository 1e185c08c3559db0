pub mod dependency_graph;
pub mod dependency_set;
pub mod edge_accumulator;
pub mod package_path;
pub mod preferred_why;
pub mod target_config;
pub mod unit_graph;

pub use dependency_graph::DependencyGraph;
pub use dependency_set::DependencySet;
pub use edge_accumulator::EdgeAccumulator;
pub use package_path::PackagePath;
pub use preferred_why::PreferredWhy;
pub use target_config::TargetConfig;
pub use unit_graph::{GraphNode, UnitGraph};
