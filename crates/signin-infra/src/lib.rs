//! # Sign-in Infrastructure
//!
//! Concrete implementations of the ports defined in `signin-core`.
//! Every adapter here is an in-process stub: no request leaves the machine
//! and nothing outlives the process.

pub mod network;
pub mod store;

pub use network::StubNetwork;
pub use store::InMemoryUserStore;
