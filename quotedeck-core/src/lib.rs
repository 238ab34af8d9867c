//! QuoteDeck Core Library
//!
//! Client-side plumbing for the QuoteDeck quotes service:
//! - Domain types (quotes, categories, profiles)
//! - Unified error type
//! - The `QuotesApi` HTTP client
//!
//! This library is platform-independent; it only talks HTTP and leaves
//! all interaction state (modals, field locks) to the front-end crates.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

// Re-export common types
pub use client::QuotesApi;
pub use error::{CoreError, CoreResult};
pub use types::{
    Category, NewQuote, ProfileUpdate, QuoteRecord, QuoteSummary, QuoteUpdate, ScalarId,
    SelectOption,
};
