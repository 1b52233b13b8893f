//! Network implementations.

mod stub;

pub use stub::StubNetwork;
