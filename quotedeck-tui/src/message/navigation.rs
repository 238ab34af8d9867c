//! Navigation messages

/// Navigation message
#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// Select the previous item
    SelectPrevious,
    /// Select the next item
    SelectNext,
    /// Confirm the selection (switch to the page)
    Confirm,
    /// Jump to the first item
    SelectFirst,
    /// Jump to the last item
    SelectLast,
}
