//! Page state definition

/// Page enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Quote listing
    #[default]
    Quotes,
    /// User profile
    Profile,
}

impl Page {
    /// Get the page title
    pub fn title(&self) -> &'static str {
        match self {
            Page::Quotes => "Quotes",
            Page::Profile => "Profile",
        }
    }
}
