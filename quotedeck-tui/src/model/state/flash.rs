//! Flash banner state

/// Flash banner category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashCategory {
    Success,
    Error,
}

/// Flash banner state
///
/// The banner is shown once per notification and stays visible until
/// explicitly dismissed.
#[derive(Debug, Default)]
pub struct FlashState {
    /// Whether the banner is currently visible
    pub visible: bool,
    /// Banner text
    pub message: String,
    /// Banner category, drives the banner color
    pub category: Option<FlashCategory>,
}

impl FlashState {
    /// Create a new flash state
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the banner with a message
    pub fn show(&mut self, message: impl Into<String>, category: FlashCategory) {
        self.message = message.into();
        self.category = Some(category);
        self.visible = true;
    }

    /// Dismiss the banner. Idempotent: dismissing an already hidden
    /// banner does nothing.
    pub fn dismiss(&mut self) {
        if self.visible {
            log::debug!("Flash banner dismissed");
            self.visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_hides_the_banner() {
        let mut flash = FlashState::new();
        flash.show("Your quote has been added successfully", FlashCategory::Success);
        assert!(flash.visible);

        flash.dismiss();
        assert!(!flash.visible);
    }

    #[test]
    fn dismiss_without_banner_is_a_no_op() {
        let mut flash = FlashState::new();
        flash.dismiss();
        flash.dismiss();
        assert!(!flash.visible);
        assert!(flash.message.is_empty());
    }
}
