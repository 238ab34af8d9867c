//! Quote listing state

use quotedeck_core::QuoteSummary;

/// Quote listing state
#[derive(Debug, Default)]
pub struct QuotesState {
    /// Quote list
    pub quotes: Vec<QuoteSummary>,
    /// Currently selected index
    pub selected: usize,
    /// Whether the listing is being loaded
    pub loading: bool,
    /// Load error message
    pub error: Option<String>,
}

impl QuotesState {
    /// Create a new quote listing state
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the listing with freshly loaded quotes
    pub fn set_quotes(&mut self, quotes: Vec<QuoteSummary>) {
        self.quotes = quotes;
        self.loading = false;
        self.error = None;
        if self.selected >= self.quotes.len() {
            self.selected = self.quotes.len().saturating_sub(1);
        }
    }

    /// Record a listing load failure
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Select the previous quote
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Select the next quote
    pub fn select_next(&mut self) {
        if self.selected < self.quotes.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Select the first quote
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Select the last quote
    pub fn select_last(&mut self) {
        self.selected = self.quotes.len().saturating_sub(1);
    }

    /// Get the currently selected quote
    pub fn selected_quote(&self) -> Option<&QuoteSummary> {
        self.quotes.get(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, quote: &str) -> QuoteSummary {
        serde_json::from_str(&format!(
            r#"{{"id": "{id}", "quote": "{quote}", "author": "a", "category": "General"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn set_quotes_clamps_selection() {
        let mut state = QuotesState::new();
        state.set_quotes(vec![summary("1", "one"), summary("2", "two"), summary("3", "three")]);
        state.select_last();
        assert_eq!(state.selected, 2);

        state.set_quotes(vec![summary("1", "one")]);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = QuotesState::new();
        state.set_quotes(vec![summary("1", "one"), summary("2", "two")]);

        state.select_previous();
        assert_eq!(state.selected, 0);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
        assert_eq!(state.selected_quote().unwrap().quote, "two");
    }
}
