//! Content panel messages
//!
//! Operations inside the content panel: list selection, opening the
//! quote modals, entering profile edit mode.

/// Content panel message
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== List navigation ==========
    /// Select the previous item
    SelectPrevious,
    /// Select the next item
    SelectNext,
    /// Jump to the first item
    SelectFirst,
    /// Jump to the last item
    SelectLast,
    /// Confirm the selection (open the view modal)
    Confirm,

    // ========== Actions ==========
    /// Add a new quote
    Add,
    /// Enter profile edit mode
    Edit,

    // ========== In-page form editing (profile) ==========
    /// Move focus to the next form field
    NextField,
    /// Move focus to the previous form field
    PrevField,
    /// Select the previous option of the focused select field
    PrevOption,
    /// Select the next option of the focused select field
    NextOption,
    /// Type a character into the focused field
    Input(char),
    /// Delete the character before the cursor
    Backspace,
}
