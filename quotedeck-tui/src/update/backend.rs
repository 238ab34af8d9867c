//! Backend result handling
//!
//! Applies task results delivered through the message channel. Results
//! can arrive at any time, so every handler re-checks that the state
//! they target still exists.

use quotedeck_core::{CoreError, QuoteRecord};

use crate::backend::QuoteService;
use crate::message::BackendMessage;
use crate::model::state::{FlashCategory, Modal};
use crate::model::App;

/// Apply a backend task result
pub fn update(app: &mut App, service: &QuoteService, msg: BackendMessage) {
    match msg {
        BackendMessage::QuotesLoaded(Ok(quotes)) => {
            app.quotes.set_quotes(quotes);
        }

        BackendMessage::QuotesLoaded(Err(err)) => {
            log::error!("Failed to load quotes: {err}");
            app.quotes.set_error(err.to_string());
        }

        BackendMessage::QuoteLoaded { token, result } => {
            handle_quote_loaded(app, token, result);
        }

        BackendMessage::QuoteSaved(Ok(())) => {
            let message = match app.modal.active {
                Some(Modal::CreateQuote { .. }) => "Your quote has been added successfully",
                _ => "Your quote has been updated successfully",
            };
            app.modal.close();
            app.clear_status();
            app.flash.show(message, FlashCategory::Success);
            app.quotes.loading = true;
            service.load_quotes();
        }

        BackendMessage::QuoteSaved(Err(err)) => {
            log::error!("Failed to save quote: {err}");
            match app.modal.active {
                Some(Modal::CreateQuote { ref mut error, .. }) => {
                    *error = Some(err.to_string());
                }
                _ => {
                    app.set_status(format!("Save failed: {err}"));
                }
            }
        }

        BackendMessage::ProfileSaved(Ok(())) => {
            app.clear_status();
            app.flash
                .show("Your profile has been updated successfully", FlashCategory::Success);
            // Back to the read-only default until the next edit
            if let Some(form) = app.profile.form.as_mut() {
                form.unlocked = false;
                form.edit_enabled = true;
                form.submit_enabled = false;
            }
        }

        BackendMessage::ProfileSaved(Err(err)) => {
            log::error!("Failed to save profile: {err}");
            app.set_status(format!("Save failed: {err}"));
        }
    }
}

/// Apply a single quote read result to the view modal.
///
/// The result is dropped when the modal has closed, belongs to an older
/// session, or has been superseded by a newer request. A failed read is
/// silent: the form fields stay untouched and submission stays disabled.
fn handle_quote_loaded(app: &mut App, token: u64, result: Result<QuoteRecord, CoreError>) {
    let latest = app.current_fetch_token();
    let Some(Modal::ViewQuote {
        token: modal_token,
        ref mut form,
        ref mut loading,
        ..
    }) = app.modal.active
    else {
        log::debug!("Dropping quote read result: modal closed");
        return;
    };

    if token != modal_token || token != latest {
        log::debug!("Dropping stale quote read result (token {token}, latest {latest})");
        return;
    }

    *loading = false;
    match result {
        Ok(record) => {
            form.apply_record(&record, &app.categories);
        }
        Err(err) if err.is_expected() => {
            log::warn!("Quote read failed: {err}");
        }
        Err(err) => {
            log::error!("Quote read failed: {err}");
        }
    }
}
