//! Modal messages

/// Modal message
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// Close the modal
    Close,

    /// Move focus to the next input field
    NextField,

    /// Move focus to the previous input field
    PrevField,

    /// Select the previous option of the focused select field
    PrevOption,

    /// Select the next option of the focused select field
    NextOption,

    /// Unlock the form fields for editing
    EnableEdit,

    /// Confirm / submit
    Confirm,

    /// Type a character
    Input(char),

    /// Delete the character before the cursor
    Backspace,
}
