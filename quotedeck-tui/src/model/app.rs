//! Application state root

use quotedeck_core::{Category, ScalarId, SelectOption};

use super::state::{FlashState, ModalState, ProfileForm, ProfileState, QuotesState, SelectField};
use super::{FocusPanel, NavigationState, Page};

/// Application state
pub struct App {
    /// Whether the application should exit
    pub should_quit: bool,

    /// Currently focused panel
    pub focus: FocusPanel,

    /// Navigation state
    pub navigation: NavigationState,

    /// Current page
    pub current_page: Page,

    /// Status bar message
    pub status_message: Option<String>,

    /// Flash banner state
    pub flash: FlashState,

    // === Page state ===
    /// Quote listing state
    pub quotes: QuotesState,
    /// Profile page state
    pub profile: ProfileState,

    /// Category option set shared by the quote forms
    pub categories: Vec<Category>,

    /// Modal state
    pub modal: ModalState,

    /// Monotonic token for in-flight quote reads; a result whose token
    /// is older than the latest issued one is stale
    fetch_seq: u64,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Self {
        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Quotes,
            status_message: None,
            flash: FlashState::new(),
            quotes: QuotesState::new(),
            profile: ProfileState::new(),
            categories: default_categories(),
            modal: ModalState::new(),
            fetch_seq: 0,
        };

        app.profile.form = Some(default_profile_form());

        app
    }

    /// Set the status bar message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status bar message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Issue the next quote read token
    pub fn next_fetch_token(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.fetch_seq
    }

    /// The most recently issued quote read token
    pub fn current_fetch_token(&self) -> u64 {
        self.fetch_seq
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// The server-seeded category set
fn default_categories() -> Vec<Category> {
    [
        "General",
        "Success and Achievement",
        "Self-Confidence and Self-Esteem",
        "Ledearship and Entrepreneurship",
        "Happiness and Positivity",
        "Perseverance and Resilience",
        "Dreams and Aspirations",
        "Inspiration from Famous Figures",
        "Fitness and Health",
        "Love and Relationships",
        "Mindfulness and Inner Peace",
        "Personal Development and Growth",
        "Creativity and Innovation",
    ]
    .iter()
    .enumerate()
    .map(|(index, name)| Category::new((index + 1).to_string(), *name))
    .collect()
}

/// Development stage: seed the profile form with placeholder data
fn default_profile_form() -> ProfileForm {
    ProfileForm {
        first_name: String::new(),
        last_name: String::new(),
        telephone: String::new(),
        gender: SelectField::new(
            vec![
                SelectOption::new("1", "Male"),
                SelectOption::new("2", "Female"),
            ],
            Some(ScalarId::new("1")),
        ),
        country: SelectField::new(
            vec![
                SelectOption::new("1", "United States"),
                SelectOption::new("2", "United Kingdom"),
                SelectOption::new("3", "France"),
                SelectOption::new("4", "Germany"),
                SelectOption::new("5", "Spain"),
                SelectOption::new("6", "Italy"),
            ],
            Some(ScalarId::new("1")),
        ),
        unlocked: false,
        edit_enabled: true,
        submit_enabled: false,
        focus: 0,
        user_id: "1".into(),
        profile_id: "1".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_tokens_are_monotonic() {
        let mut app = App::new();
        let first = app.next_fetch_token();
        let second = app.next_fetch_token();
        assert!(second > first);
        assert_eq!(app.current_fetch_token(), second);
    }

    #[test]
    fn categories_are_seeded() {
        let app = App::new();
        assert_eq!(app.categories.len(), 13);
        assert_eq!(app.categories[0].name, "General");
        assert_eq!(app.categories[0].id.as_str(), "1");
    }
}
