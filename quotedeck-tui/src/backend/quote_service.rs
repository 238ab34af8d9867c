//! Async bridge to the quote service API

use std::sync::Arc;

use quotedeck_core::{NewQuote, ProfileUpdate, QuoteUpdate, QuotesApi};
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, BackendMessage};

/// Spawns API calls and reports their results over the message channel.
///
/// Cheap to clone by construction: the API client sits behind an `Arc`
/// and each spawned task gets its own handle. Send failures are ignored
/// because they only happen when the main loop has already shut down.
pub struct QuoteService {
    api: Arc<QuotesApi>,
    tx: UnboundedSender<AppMessage>,
}

impl QuoteService {
    pub fn new(api: QuotesApi, tx: UnboundedSender<AppMessage>) -> Self {
        Self {
            api: Arc::new(api),
            tx,
        }
    }

    /// Load the quote listing
    pub fn load_quotes(&self) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.list_quotes().await;
            let _ = tx.send(AppMessage::Backend(BackendMessage::QuotesLoaded(result)));
        });
    }

    /// Read one quote record; the token travels with the result so the
    /// update layer can discard answers from superseded requests
    pub fn load_quote(&self, quote_id: String, token: u64) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.get_quote(&quote_id).await;
            let _ = tx.send(AppMessage::Backend(BackendMessage::QuoteLoaded {
                token,
                result,
            }));
        });
    }

    /// Create a new quote
    pub fn create_quote(&self, quote: NewQuote) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.create_quote(&quote).await;
            let _ = tx.send(AppMessage::Backend(BackendMessage::QuoteSaved(result)));
        });
    }

    /// Update an existing quote through its record-supplied action URL
    pub fn save_quote(&self, action_url: String, update: QuoteUpdate) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.update_quote(&action_url, &update).await;
            let _ = tx.send(AppMessage::Backend(BackendMessage::QuoteSaved(result)));
        });
    }

    /// Update the user profile
    pub fn save_profile(&self, user_id: String, profile_id: String, update: ProfileUpdate) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.update_profile(&user_id, &profile_id, &update).await;
            let _ = tx.send(AppMessage::Backend(BackendMessage::ProfileSaved(result)));
        });
    }
}
