//! Dependency audit core - pure graph accumulation, attribution, and rendering.
//!
//! Nothing in here performs I/O; the application layer feeds loaded graphs in
//! and hands the rendered snapshot to adapters.
pub mod domain;
pub mod policies;
pub mod services;
