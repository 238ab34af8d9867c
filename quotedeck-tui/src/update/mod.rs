//! Update layer: state transition logic
//!
//! The only place allowed to mutate the model. Messages arrive from the
//! event layer (user input) and from the backend channel (task results);
//! each variant maps to one state change, with the page, modal and
//! backend specific transitions delegated to the submodules.

mod backend;
mod content;
mod modal;
mod navigation;

use crate::backend::QuoteService;
use crate::message::AppMessage;
use crate::model::{App, NavItemId, Page};

/// Apply an application message to the model
pub fn update(app: &mut App, service: &QuoteService, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // Focus stays where it is while a modal is open
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, service, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, service, modal_msg);
        }

        AppMessage::Backend(backend_msg) => {
            backend::update(app, service, backend_msg);
        }

        AppMessage::DismissFlash => {
            app.flash.dismiss();
        }

        AppMessage::GoBack => {
            // A modal swallows back before anything else sees it
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            }
        }

        AppMessage::Refresh => {
            if app.current_page == Page::Quotes {
                app.quotes.loading = true;
                app.set_status("Refreshing...");
                service.load_quotes();
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// Map a navigation item ID to its page
fn page_from_nav_id(id: NavItemId) -> Page {
    match id {
        NavItemId::Quotes => Page::Quotes,
        NavItemId::Profile => Page::Profile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{BackendMessage, ContentMessage, ModalMessage};
    use crate::model::state::Modal;
    use quotedeck_core::{CoreError, QuoteRecord, QuotesApi};
    use tokio::sync::mpsc;

    fn service() -> (QuoteService, mpsc::UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (QuoteService::new(QuotesApi::new("http://localhost:5000"), tx), rx)
    }

    fn record(quote: &str, category_id: &str) -> QuoteRecord {
        serde_json::from_str(&format!(
            r#"{{
                "quote": "{quote}",
                "author": "a",
                "category_id": "{category_id}",
                "quote_url": "/quotes/update/q1"
            }}"#
        ))
        .unwrap()
    }

    fn open_view_modal(app: &mut App, quote_id: &str) -> u64 {
        let token = app.next_fetch_token();
        app.modal.show_view_quote(quote_id, token);
        token
    }

    #[tokio::test]
    async fn fetched_record_populates_and_locks_the_form() {
        let (service, _rx) = service();
        let mut app = App::new();
        let token = open_view_modal(&mut app, "q1");

        update(
            &mut app,
            &service,
            AppMessage::Backend(BackendMessage::QuoteLoaded {
                token,
                result: Ok(record("Stay hungry", "2")),
            }),
        );

        let Some(Modal::ViewQuote { form, loading, .. }) = &app.modal.active else {
            panic!("view modal should still be open");
        };
        assert!(!loading);
        assert_eq!(form.quote, "Stay hungry");
        assert!(form.locks.all_locked());
        assert!(!form.submit_enabled);
        assert_eq!(form.action_url.as_deref(), Some("/quotes/update/q1"));
    }

    #[tokio::test]
    async fn stale_fetch_result_is_discarded() {
        let (service, _rx) = service();
        let mut app = App::new();
        let stale = open_view_modal(&mut app, "q1");

        // Reopen for a different quote before the first read lands
        update(&mut app, &service, AppMessage::GoBack);
        let fresh = open_view_modal(&mut app, "q2");

        update(
            &mut app,
            &service,
            AppMessage::Backend(BackendMessage::QuoteLoaded {
                token: stale,
                result: Ok(record("old session", "1")),
            }),
        );

        let Some(Modal::ViewQuote { form, loading, token, .. }) = &app.modal.active else {
            panic!("view modal should still be open");
        };
        assert_eq!(*token, fresh);
        assert!(loading);
        assert!(form.quote.is_empty());
    }

    #[tokio::test]
    async fn failed_fetch_is_silent_and_keeps_submit_disabled() {
        let (service, _rx) = service();
        let mut app = App::new();
        let token = open_view_modal(&mut app, "q1");

        update(
            &mut app,
            &service,
            AppMessage::Backend(BackendMessage::QuoteLoaded {
                token,
                result: Err(CoreError::NetworkError("connection refused".into())),
            }),
        );

        let Some(Modal::ViewQuote { form, .. }) = &app.modal.active else {
            panic!("view modal should still be open");
        };
        assert!(form.quote.is_empty());
        assert!(!form.submit_enabled);
        assert!(app.status_message.is_none());
    }

    #[tokio::test]
    async fn result_arriving_after_close_is_ignored() {
        let (service, _rx) = service();
        let mut app = App::new();
        let token = open_view_modal(&mut app, "q1");
        update(&mut app, &service, AppMessage::GoBack);

        update(
            &mut app,
            &service,
            AppMessage::Backend(BackendMessage::QuoteLoaded {
                token,
                result: Ok(record("late", "1")),
            }),
        );
        assert!(!app.modal.is_open());
    }

    #[tokio::test]
    async fn close_and_reopen_resets_editing_state() {
        let (service, _rx) = service();
        let mut app = App::new();
        let token = open_view_modal(&mut app, "q1");

        update(
            &mut app,
            &service,
            AppMessage::Backend(BackendMessage::QuoteLoaded {
                token,
                result: Ok(record("Stay hungry", "2")),
            }),
        );
        update(&mut app, &service, AppMessage::Modal(ModalMessage::EnableEdit));

        {
            let Some(Modal::ViewQuote { form, .. }) = &app.modal.active else {
                panic!("view modal should be open");
            };
            assert!(form.locks.all_unlocked());
            assert!(form.submit_enabled);
        }

        update(&mut app, &service, AppMessage::GoBack);
        open_view_modal(&mut app, "q1");

        let Some(Modal::ViewQuote { form, .. }) = &app.modal.active else {
            panic!("view modal should be open");
        };
        assert!(form.locks.all_locked());
        assert!(form.edit_enabled);
        assert!(!form.submit_enabled);
    }

    #[tokio::test]
    async fn saved_quote_closes_modal_and_shows_flash() {
        let (service, _rx) = service();
        let mut app = App::new();
        let token = open_view_modal(&mut app, "q1");

        update(
            &mut app,
            &service,
            AppMessage::Backend(BackendMessage::QuoteLoaded {
                token,
                result: Ok(record("Stay hungry", "2")),
            }),
        );
        update(&mut app, &service, AppMessage::Backend(BackendMessage::QuoteSaved(Ok(()))));

        assert!(!app.modal.is_open());
        assert!(app.flash.visible);
        assert_eq!(app.flash.message, "Your quote has been updated successfully");

        update(&mut app, &service, AppMessage::DismissFlash);
        assert!(!app.flash.visible);
    }

    #[tokio::test]
    async fn submit_without_category_selection_reports_instead_of_sending() {
        let (service, mut rx) = service();
        let mut app = App::new();
        let token = open_view_modal(&mut app, "q1");

        // Record whose category matches no option: selection stays empty
        update(
            &mut app,
            &service,
            AppMessage::Backend(BackendMessage::QuoteLoaded {
                token,
                result: Ok(record("Stay hungry", "99")),
            }),
        );
        update(&mut app, &service, AppMessage::Modal(ModalMessage::EnableEdit));
        update(&mut app, &service, AppMessage::Modal(ModalMessage::Confirm));

        assert_eq!(app.status_message.as_deref(), Some("Select a category first"));
        assert!(rx.try_recv().is_err());
        assert!(app.modal.is_open());
    }

    #[tokio::test]
    async fn add_modal_opens_without_a_network_read() {
        let (service, mut rx) = service();
        let mut app = App::new();
        app.current_page = Page::Quotes;

        update(&mut app, &service, AppMessage::Content(ContentMessage::Add));

        assert!(matches!(app.modal.active, Some(Modal::CreateQuote { .. })));
        assert!(rx.try_recv().is_err());
    }
}
