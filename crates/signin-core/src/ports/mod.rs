//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure and presentation must implement.

mod network;
mod output;
mod store;

pub use network::Network;
pub use output::SignInOutput;
pub use store::UserStore;
