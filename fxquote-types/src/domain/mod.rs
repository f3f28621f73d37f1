//! Domain models for quote resolution.

pub mod currency;
pub mod rate;
pub mod resolution;

pub use currency::{CurrencyCode, QuoteRequest};
pub use rate::{INVERSION_TOLERANCE, QuoteResult, Rate};
pub use resolution::{Attempt, AttemptOutcome, Direction, Resolution};
