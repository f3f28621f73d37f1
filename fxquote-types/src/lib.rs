//! # FX Quote Types
//!
//! Domain types and port traits for the FX quote resolution service.
//! This crate has ZERO external IO dependencies - only data structures,
//! normalization rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, Rate, QuoteResult, Resolution)
//! - `ports/` - Trait definitions that provider adapters must implement
//! - `dto/` - Data Transfer Objects for the HTTP boundary
//! - `error/` - Domain, provider and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Attempt, AttemptOutcome, CurrencyCode, Direction, INVERSION_TOLERANCE, QuoteRequest,
    QuoteResult, Rate, Resolution,
};
pub use dto::*;
pub use error::{AppError, DomainError, ProviderError};
pub use ports::{JsonTransport, QuoteProvider};
