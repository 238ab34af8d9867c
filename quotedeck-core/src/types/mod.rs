//! Domain type definitions
//!
//! Wire-level representations of quotes, categories and profiles as the
//! service exposes them.

mod profile;
mod quote;
mod scalar;

pub use profile::{ProfileUpdate, SelectOption};
pub use quote::{Category, NewQuote, QuoteRecord, QuoteSummary, QuoteUpdate};
pub use scalar::ScalarId;
