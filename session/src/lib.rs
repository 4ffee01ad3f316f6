//! Host/client session layer over an external peer transport.
//!
//! The transport (connection setup, room codes, ordering) lives outside the
//! core; this crate consumes per-connection channels plus their lifecycle
//! events and keeps the shared world consistent across peers.

pub mod scheduler;
pub mod session;
mod wire;

pub use scheduler::*;
pub use session::*;
