//! # FX Quote Hex
//!
//! Application service layer and HTTP adapter for the FX quote service.
//!
//! ## Architecture
//!
//! - `service/` - Resolution chain (ordered provider fallback, inversion)
//! - `guard/` - Per-call deadline around a single provider invocation
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service holds `Arc<dyn QuoteProvider>` lists, so any adapter
//! implementing the port can be injected in any order.

pub mod guard;
pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::{DEFAULT_PROVIDER_TIMEOUT, QuoteService};
