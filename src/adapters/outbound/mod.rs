/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod diff;
pub mod filesystem;
pub mod golang;
