//! Top-level application message

use super::{BackendMessage, ContentMessage, ModalMessage, NavigationMessage};

/// Application message
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Quit the application
    Quit,

    /// Toggle the focused panel (left/right)
    ToggleFocus,

    /// Navigation panel message
    Navigation(NavigationMessage),

    /// Content panel message
    Content(ContentMessage),

    /// Modal message
    Modal(ModalMessage),

    /// Backend task result
    Backend(BackendMessage),

    /// Dismiss the flash banner
    DismissFlash,

    /// Go back (close the modal if one is open)
    GoBack,

    /// Refresh the current page
    Refresh,

    /// Show the help modal
    ShowHelp,

    /// Clear the status bar message
    ClearStatus,

    /// No operation (unhandled events map here)
    Noop,
}
