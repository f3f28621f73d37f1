//! Port traits (interfaces for adapters).
//!
//! These are the contracts that provider adapters must implement.
//! The resolution chain depends on these traits, not concrete implementations.

mod provider;
mod transport;

pub use provider::QuoteProvider;
pub use transport::JsonTransport;
