//! Navigation state definition

/// Navigation item ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Quotes,
    Profile,
}

/// Navigation item
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Navigation state
pub struct NavigationState {
    /// Navigation item list
    pub items: Vec<NavItem>,
    /// Currently selected index
    pub selected: usize,
}

impl NavigationState {
    /// Create the default navigation state
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Quotes,
                    label: "Quotes",
                    icon: "❝",
                },
                NavItem {
                    id: NavItemId::Profile,
                    label: "Profile",
                    icon: "@",
                },
            ],
            selected: 0,
        }
    }

    /// Select the previous item
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Select the next item
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Get the currently selected navigation item
    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    /// Get the ID of the currently selected navigation item
    pub fn current_id(&self) -> Option<NavItemId> {
        self.current_item().map(|item| item.id)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
