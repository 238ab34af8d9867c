//! Backend task result messages

use quotedeck_core::{CoreError, QuoteRecord, QuoteSummary};

/// Result delivered by a spawned backend task
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// Quote listing load finished
    QuotesLoaded(Result<Vec<QuoteSummary>, CoreError>),

    /// Single quote read finished. The token identifies which view
    /// session issued the request.
    QuoteLoaded {
        token: u64,
        result: Result<QuoteRecord, CoreError>,
    },

    /// Quote create or update finished
    QuoteSaved(Result<(), CoreError>),

    /// Profile update finished
    ProfileSaved(Result<(), CoreError>),
}
