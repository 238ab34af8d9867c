//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::Modal;
use crate::model::{App, Page};

/// Poll for the next event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate an event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Terminal resize redraws on the next loop pass
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

/// Translate a key event into a message
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Only react to Press; Release and Repeat would double keystrokes
    // on Windows terminals
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // An open modal captures all input
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // While the profile form accepts text, bare letters are input, not
    // shortcuts
    if profile_editing(app) {
        return handle_profile_edit_keys(key);
    }

    // Global shortcuts
    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::DISMISS_FLASH.matches(&key) {
        return AppMessage::DismissFlash;
    }

    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    if DefaultKeymap::QUIT.matches(&key)
        || (key.modifiers == KeyModifiers::ALT && key.code == KeyCode::Char('q'))
    {
        return AppMessage::Quit;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key)
    }
}

/// Whether the profile form is currently accepting input
fn profile_editing(app: &App) -> bool {
    app.current_page == Page::Profile
        && app.focus.is_content()
        && app
            .profile
            .form
            .as_ref()
            .is_some_and(|form| form.unlocked)
}

/// Navigation panel keys
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// Content panel keys
fn handle_content_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// Keys while the profile form is unlocked
fn handle_profile_edit_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::DISMISS_FLASH.matches(&key) {
        return AppMessage::DismissFlash;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Content(ContentMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Content(ContentMessage::PrevField),
        KeyCode::Left => AppMessage::Content(ContentMessage::PrevOption),
        KeyCode::Right => AppMessage::Content(ContentMessage::NextOption),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            AppMessage::Content(ContentMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// Keys while a modal is open
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc and Ctrl+C always close the modal
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::CreateQuote { focus, .. } => handle_quote_form_keys(key, *focus, false),
        Modal::ViewQuote { form, .. } => handle_quote_form_keys(key, form.focus, true),
        Modal::Help => match key.code {
            KeyCode::Enter | KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// Keys inside the add and view/edit quote modals
fn handle_quote_form_keys(key: KeyEvent, focus: usize, has_edit_trigger: bool) -> AppMessage {
    if has_edit_trigger && DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::EnableEdit);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),

        // Category options cycle only while that field is focused
        KeyCode::Left if focus == 2 => AppMessage::Modal(ModalMessage::PrevOption),
        KeyCode::Right if focus == 2 => AppMessage::Modal(ModalMessage::NextOption),

        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),

        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Modal(ModalMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn release_events_are_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        let app = App::new();
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }

    #[test]
    fn escape_closes_an_open_modal() {
        let mut app = App::new();
        app.modal.show_create_quote();
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn typing_in_profile_edit_mode_is_input_not_shortcut() {
        let mut app = App::new();
        app.current_page = Page::Profile;
        app.focus = crate::model::FocusPanel::Content;
        if let Some(form) = app.profile.form.as_mut() {
            form.begin_edit();
        }
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Content(ContentMessage::Input('q'))
        ));
    }

    #[test]
    fn q_quits_outside_edit_mode() {
        let app = App::new();
        assert!(matches!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit));
    }
}
