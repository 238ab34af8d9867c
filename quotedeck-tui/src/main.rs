//! QuoteDeck TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: UI rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: service calls (`backend/`)
//!
//! The backend layer talks to `quotedeck-core` on the tokio runtime and
//! feeds results back into the update loop through an unbounded channel,
//! so the UI thread never blocks on the network.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use tokio::sync::mpsc;

use backend::QuoteService;
use quotedeck_core::QuotesApi;
use util::{init_terminal, restore_terminal};

/// Default service address, overridable via `QUOTEDECK_BASE_URL`.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Build the backend service
    let base_url =
        std::env::var("QUOTEDECK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let service = QuoteService::new(QuotesApi::new(base_url), tx);

    // 2. Create the application instance and kick off the page load
    let mut app = model::App::new();
    app.quotes.loading = true;
    service.load_quotes();

    // 3. Initialize the terminal
    let mut terminal = init_terminal()?;

    // 4. Run the main loop
    let result = app::run(&mut terminal, &mut app, &service, &mut rx);

    // 5. Restore the terminal (success or failure)
    restore_terminal(&mut terminal)?;

    result
}
