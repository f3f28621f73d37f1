//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the quote service.

mod handlers;
mod server;

pub use server::{DEFAULT_CACHE_MAX_AGE, HttpServer};
