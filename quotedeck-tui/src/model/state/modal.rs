//! Modal/dialog state

use quotedeck_core::{Category, QuoteRecord};

/// Editability flags for the three quote form fields.
///
/// A locked field rejects input; the view renders it dimmed. All three
/// start locked whenever the view modal opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLocks {
    pub quote: bool,
    pub author: bool,
    pub category: bool,
}

impl FieldLocks {
    /// All fields locked (the modal-open default)
    pub fn locked() -> Self {
        Self {
            quote: true,
            author: true,
            category: true,
        }
    }

    pub fn lock_all(&mut self) {
        *self = Self::locked();
    }

    pub fn unlock_all(&mut self) {
        self.quote = false;
        self.author = false;
        self.category = false;
    }

    pub fn all_locked(&self) -> bool {
        self.quote && self.author && self.category
    }

    pub fn all_unlocked(&self) -> bool {
        !self.quote && !self.author && !self.category
    }
}

impl Default for FieldLocks {
    fn default() -> Self {
        Self::locked()
    }
}

/// The view/edit quote form.
///
/// State machine per session:
/// `Open(locked) -[edit]-> Open(unlocked) -[close]-> Closed`,
/// where close always discards the form so the next open starts from
/// the locked default. The edit and submit triggers are mutually
/// exclusive in their enabled state.
#[derive(Debug, Clone)]
pub struct QuoteForm {
    pub quote: String,
    pub author: String,
    /// Selection index into the category option set; `None` until a
    /// fetched record (or the user) picks one
    pub category_index: Option<usize>,
    pub locks: FieldLocks,
    pub edit_enabled: bool,
    pub submit_enabled: bool,
    /// Canonical submission URL, taken verbatim from the fetched record
    pub action_url: Option<String>,
    /// Focus: 0 = quote, 1 = author, 2 = category
    pub focus: usize,
}

impl QuoteForm {
    /// The state every view session starts in: fields locked, edit
    /// enabled, submission disabled.
    pub fn locked() -> Self {
        Self {
            quote: String::new(),
            author: String::new(),
            category_index: None,
            locks: FieldLocks::locked(),
            edit_enabled: true,
            submit_enabled: false,
            action_url: None,
            focus: 0,
        }
    }

    /// Populate the form from a fetched record and lock every field.
    ///
    /// Category selection: the option whose value loosely equals the
    /// record's `category_id` becomes selected; when none matches, the
    /// prior selection is left untouched.
    pub fn apply_record(&mut self, record: &QuoteRecord, categories: &[Category]) {
        self.quote = record.quote.clone();
        self.author = record.author.clone();

        if let Some(index) = categories
            .iter()
            .position(|c| c.id.loosely_equals(&record.category_id))
        {
            self.category_index = Some(index);
        }

        self.action_url = Some(record.quote_url.clone());
        self.locks.lock_all();
    }

    /// Unlock every field and swap the trigger pair: submit becomes
    /// enabled, edit becomes disabled. Idempotent.
    pub fn enable_editing(&mut self) {
        self.locks.unlock_all();
        self.submit_enabled = true;
        self.edit_enabled = false;
    }
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self::locked()
    }
}

/// Modal type
#[derive(Debug, Clone)]
pub enum Modal {
    /// Add a new quote
    CreateQuote {
        quote: String,
        author: String,
        /// Selection index into the category option set
        category_index: usize,
        /// Focus: 0 = quote, 1 = author, 2 = category
        focus: usize,
        /// Validation error
        error: Option<String>,
    },
    /// View / edit an existing quote
    ViewQuote {
        quote_id: String,
        /// Request token captured at open; stale fetch results carrying
        /// an older token are discarded
        token: u64,
        form: QuoteForm,
        /// Whether the record read is still in flight
        loading: bool,
    },
    /// Keyboard help
    Help,
}

/// Modal state
///
/// A single-valued active slot: opening one modal structurally excludes
/// any other being open at the same time.
#[derive(Debug, Default)]
pub struct ModalState {
    /// Currently active modal
    pub active: Option<Modal>,
}

impl ModalState {
    /// Create a new modal state
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the modal
    pub fn close(&mut self) {
        self.active = None;
    }

    /// Whether a modal is open
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Show the add-quote modal. No network call is involved; reopening
    /// over an already-open create modal resets its fields.
    pub fn show_create_quote(&mut self) {
        self.active = Some(Modal::CreateQuote {
            quote: String::new(),
            author: String::new(),
            category_index: 0,
            focus: 0,
            error: None,
        });
    }

    /// Show the view/edit modal in its locked default state.
    pub fn show_view_quote(&mut self, quote_id: impl Into<String>, token: u64) {
        self.active = Some(Modal::ViewQuote {
            quote_id: quote_id.into(),
            token,
            form: QuoteForm::locked(),
            loading: true,
        });
    }

    /// Show the help modal
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category::new("1", "General"),
            Category::new("2", "Success and Achievement"),
            Category::new("3", "Happiness and Positivity"),
        ]
    }

    fn record(category_id: &str) -> QuoteRecord {
        serde_json::from_str(&format!(
            r#"{{
                "quote": "Stay hungry",
                "author": "Steve Jobs",
                "category_id": "{category_id}",
                "quote_url": "/quotes/update/q1"
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn open_defaults_are_locked_with_submit_disabled() {
        let form = QuoteForm::locked();
        assert!(form.locks.all_locked());
        assert!(form.edit_enabled);
        assert!(!form.submit_enabled);
        assert!(form.action_url.is_none());
    }

    #[test]
    fn apply_record_populates_and_locks() {
        let mut form = QuoteForm::locked();
        form.enable_editing();
        form.apply_record(&record("2"), &categories());

        assert_eq!(form.quote, "Stay hungry");
        assert_eq!(form.author, "Steve Jobs");
        assert_eq!(form.category_index, Some(1));
        assert_eq!(form.action_url.as_deref(), Some("/quotes/update/q1"));
        assert!(form.locks.all_locked());
    }

    #[test]
    fn category_matches_numeric_wire_value() {
        let mut form = QuoteForm::locked();
        let record: QuoteRecord = serde_json::from_str(
            r#"{
                "quote": "q",
                "author": "a",
                "category_id": 2,
                "quote_url": "/quotes/update/q1"
            }"#,
        )
        .unwrap();
        form.apply_record(&record, &categories());
        assert_eq!(form.category_index, Some(1));
    }

    #[test]
    fn unmatched_category_keeps_prior_selection() {
        let mut form = QuoteForm::locked();
        form.category_index = Some(0);
        form.apply_record(&record("9"), &categories());
        assert_eq!(form.category_index, Some(0));
    }

    #[test]
    fn enable_editing_is_idempotent() {
        let mut once = QuoteForm::locked();
        once.enable_editing();

        let mut twice = QuoteForm::locked();
        twice.enable_editing();
        twice.enable_editing();

        assert!(twice.locks.all_unlocked());
        assert_eq!(once.locks, twice.locks);
        assert_eq!(once.edit_enabled, twice.edit_enabled);
        assert_eq!(once.submit_enabled, twice.submit_enabled);
    }

    #[test]
    fn reopen_after_close_restores_locked_default() {
        let mut state = ModalState::new();
        state.show_view_quote("q1", 1);

        // Enter editing, then close the modal
        if let Some(Modal::ViewQuote { form, .. }) = state.active.as_mut() {
            form.enable_editing();
        }
        state.close();
        assert!(!state.is_open());

        // The next session must start from the locked default
        state.show_view_quote("q1", 2);
        let Some(Modal::ViewQuote { form, .. }) = state.active.as_ref() else {
            panic!("view modal should be open");
        };
        assert!(form.locks.all_locked());
        assert!(form.edit_enabled);
        assert!(!form.submit_enabled);
    }

    #[test]
    fn opening_one_modal_replaces_the_other() {
        let mut state = ModalState::new();
        state.show_create_quote();
        state.show_view_quote("q1", 1);
        assert!(matches!(state.active, Some(Modal::ViewQuote { .. })));
    }
}
