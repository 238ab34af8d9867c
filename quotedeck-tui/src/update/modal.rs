//! Modal update logic

use quotedeck_core::{NewQuote, QuoteUpdate};

use crate::backend::QuoteService;
use crate::message::ModalMessage;
use crate::model::state::Modal;
use crate::model::App;

/// Focus slots of the quote forms: quote, author, category
const QUOTE_FIELD_COUNT: usize = 3;

/// Apply a modal message to the active modal
pub fn update(app: &mut App, service: &QuoteService, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::CreateQuote { .. } => handle_create_quote(app, service, msg),
        Modal::ViewQuote { .. } => handle_view_quote(app, service, msg),
        Modal::Help => handle_simple_modal(app, msg),
    }
}

/// Handle the add-quote modal
fn handle_create_quote(app: &mut App, service: &QuoteService, msg: ModalMessage) {
    let category_count = app.categories.len();
    let Some(Modal::CreateQuote {
        ref mut quote,
        ref mut author,
        ref mut category_index,
        ref mut focus,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::NextField => {
            *focus = (*focus + 1) % QUOTE_FIELD_COUNT;
        }

        ModalMessage::PrevField => {
            *focus = (*focus + QUOTE_FIELD_COUNT - 1) % QUOTE_FIELD_COUNT;
        }

        ModalMessage::PrevOption => {
            if *focus == 2 && *category_index > 0 {
                *category_index -= 1;
            }
        }

        ModalMessage::NextOption => {
            if *focus == 2 && *category_index + 1 < category_count {
                *category_index += 1;
            }
        }

        ModalMessage::Confirm => {
            if quote.trim().is_empty() || author.trim().is_empty() {
                *error = Some("Please fill in the quote and author fields".to_string());
                return;
            }
            let Some(category) = app.categories.get(*category_index) else {
                return;
            };

            let new_quote = NewQuote {
                quote: quote.clone(),
                author: author.clone(),
                category_id: category.id.clone(),
            };
            service.create_quote(new_quote);
            app.set_status("Saving quote...");
        }

        ModalMessage::Input(ch) => {
            match *focus {
                0 => quote.push(ch),
                1 => author.push(ch),
                _ => {}
            }
            *error = None;
        }

        ModalMessage::Backspace => match *focus {
            0 => {
                quote.pop();
            }
            1 => {
                author.pop();
            }
            _ => {}
        },

        ModalMessage::EnableEdit => {
            // The add form is always editable
        }
    }
}

/// Handle the view/edit quote modal
///
/// While the fields are locked only Close and EnableEdit do anything;
/// unlocking routes input into the form and arms the submit trigger.
fn handle_view_quote(app: &mut App, service: &QuoteService, msg: ModalMessage) {
    let category_count = app.categories.len();
    let Some(Modal::ViewQuote { ref mut form, .. }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::EnableEdit => {
            if form.edit_enabled {
                form.enable_editing();
            }
        }

        ModalMessage::NextField => {
            form.focus = (form.focus + 1) % QUOTE_FIELD_COUNT;
        }

        ModalMessage::PrevField => {
            form.focus = (form.focus + QUOTE_FIELD_COUNT - 1) % QUOTE_FIELD_COUNT;
        }

        ModalMessage::PrevOption => {
            if form.focus == 2 && !form.locks.category {
                match form.category_index {
                    Some(index) if index > 0 => form.category_index = Some(index - 1),
                    None if category_count > 0 => form.category_index = Some(0),
                    _ => {}
                }
            }
        }

        ModalMessage::NextOption => {
            if form.focus == 2 && !form.locks.category {
                match form.category_index {
                    Some(index) if index + 1 < category_count => {
                        form.category_index = Some(index + 1);
                    }
                    None if category_count > 0 => form.category_index = Some(0),
                    _ => {}
                }
            }
        }

        ModalMessage::Confirm => {
            if !form.submit_enabled {
                return;
            }
            let Some(action_url) = form.action_url.clone() else {
                return;
            };
            let Some(category) = form
                .category_index
                .and_then(|index| app.categories.get(index))
            else {
                app.set_status("Select a category first");
                return;
            };

            let update = QuoteUpdate {
                quote: form.quote.clone(),
                author: form.author.clone(),
                category_id: category.id.clone(),
            };
            service.save_quote(action_url, update);
            app.set_status("Saving quote...");
        }

        ModalMessage::Input(ch) => match form.focus {
            0 if !form.locks.quote => form.quote.push(ch),
            1 if !form.locks.author => form.author.push(ch),
            _ => {}
        },

        ModalMessage::Backspace => match form.focus {
            0 if !form.locks.quote => {
                form.quote.pop();
            }
            1 if !form.locks.author => {
                form.author.pop();
            }
            _ => {}
        },
    }
}

/// Handle modals that only react to close
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
        app.clear_status();
    }
}
