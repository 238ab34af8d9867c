//! Content panel update logic
//!
//! List navigation plus the actions that open the quote modals and
//! enter profile edit mode.

use quotedeck_core::ProfileUpdate;

use crate::backend::QuoteService;
use crate::message::ContentMessage;
use crate::model::{App, Page};

/// Apply a content panel message
pub fn update(app: &mut App, service: &QuoteService, msg: ContentMessage) {
    match msg {
        // ========== List navigation ==========
        ContentMessage::SelectPrevious => {
            if app.current_page == Page::Quotes {
                app.quotes.select_previous();
            }
        }
        ContentMessage::SelectNext => {
            if app.current_page == Page::Quotes {
                app.quotes.select_next();
            }
        }
        ContentMessage::SelectFirst => {
            if app.current_page == Page::Quotes {
                app.quotes.select_first();
            }
        }
        ContentMessage::SelectLast => {
            if app.current_page == Page::Quotes {
                app.quotes.select_last();
            }
        }
        ContentMessage::Confirm => {
            handle_confirm(app, service);
        }

        // ========== Actions ==========
        ContentMessage::Add => {
            handle_add(app);
        }
        ContentMessage::Edit => {
            handle_edit(app);
        }

        // ========== In-page form editing ==========
        ContentMessage::NextField => {
            if let Some(form) = unlocked_profile_form(app) {
                form.focus = (form.focus + 1) % PROFILE_FIELD_COUNT;
            }
        }
        ContentMessage::PrevField => {
            if let Some(form) = unlocked_profile_form(app) {
                form.focus = (form.focus + PROFILE_FIELD_COUNT - 1) % PROFILE_FIELD_COUNT;
            }
        }
        ContentMessage::PrevOption => {
            if let Some(form) = unlocked_profile_form(app) {
                match form.focus {
                    3 => form.gender.select_previous(),
                    4 => form.country.select_previous(),
                    _ => {}
                }
            }
        }
        ContentMessage::NextOption => {
            if let Some(form) = unlocked_profile_form(app) {
                match form.focus {
                    3 => form.gender.select_next(),
                    4 => form.country.select_next(),
                    _ => {}
                }
            }
        }
        ContentMessage::Input(ch) => {
            if let Some(form) = unlocked_profile_form(app) {
                match form.focus {
                    0 => form.first_name.push(ch),
                    1 => form.last_name.push(ch),
                    2 => form.telephone.push(ch),
                    _ => {}
                }
            }
        }
        ContentMessage::Backspace => {
            if let Some(form) = unlocked_profile_form(app) {
                match form.focus {
                    0 => {
                        form.first_name.pop();
                    }
                    1 => {
                        form.last_name.pop();
                    }
                    2 => {
                        form.telephone.pop();
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Focus slots of the profile form: three text inputs plus two selects
const PROFILE_FIELD_COUNT: usize = 5;

fn unlocked_profile_form(app: &mut App) -> Option<&mut crate::model::state::ProfileForm> {
    if app.current_page != Page::Profile {
        return None;
    }
    app.profile.form.as_mut().filter(|form| form.unlocked)
}

/// Open the view modal for the selected quote and start its record read.
///
/// The modal opens immediately in its locked default state; the read
/// result lands later through the backend channel, tagged with a fresh
/// token so a result from a previous session cannot populate this one.
fn handle_confirm(app: &mut App, service: &QuoteService) {
    match app.current_page {
        Page::Quotes => {
            let Some(quote) = app.quotes.selected_quote() else {
                return;
            };
            let quote_id = quote.id.to_string();
            let token = app.next_fetch_token();
            app.modal.show_view_quote(quote_id.clone(), token);
            service.load_quote(quote_id, token);
        }
        Page::Profile => {
            submit_profile(app, service);
        }
    }
}

/// Submit the profile form when editing has enabled submission
fn submit_profile(app: &mut App, service: &QuoteService) {
    let Some(form) = app.profile.form.as_ref() else {
        return;
    };
    if !form.submit_enabled {
        return;
    }

    let (Some(gender), Some(country)) = (
        form.gender.selected_option(),
        form.country.selected_option(),
    ) else {
        app.set_status("Select a gender and a country first");
        return;
    };

    let update = ProfileUpdate {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        telephone: form.telephone.clone(),
        gender_id: gender.id.clone(),
        country_id: country.id.clone(),
    };
    service.save_profile(form.user_id.clone(), form.profile_id.clone(), update);
    app.set_status("Saving profile...");
}

fn handle_add(app: &mut App) {
    match app.current_page {
        Page::Quotes => {
            app.modal.show_create_quote();
        }
        Page::Profile => {
            app.set_status("Add not supported on this page");
        }
    }
}

fn handle_edit(app: &mut App) {
    match app.current_page {
        Page::Profile => {
            if let Some(form) = app.profile.form.as_mut() {
                form.begin_edit();
            } else {
                app.set_status("No profile loaded");
            }
        }
        Page::Quotes => {
            app.set_status("Open a quote to edit it");
        }
    }
}
