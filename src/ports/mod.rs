/// Ports module defining interfaces for hexagonal architecture
///
/// The audit core only talks to the outside world through the outbound
/// (driven) ports declared here.
pub mod outbound;
