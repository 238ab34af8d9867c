//! Profile page state

use quotedeck_core::{ScalarId, SelectOption};

/// A single-choice select field.
///
/// `expected` carries the value the profile record holds for this field.
/// Entering edit mode aligns the selection with it via the normalizing
/// comparison, so a numeric record value still matches a string option.
#[derive(Debug, Default)]
pub struct SelectField {
    pub options: Vec<SelectOption>,
    pub selected: Option<usize>,
    pub expected: Option<ScalarId>,
}

impl SelectField {
    pub fn new(options: Vec<SelectOption>, expected: Option<ScalarId>) -> Self {
        Self {
            options,
            selected: None,
            expected,
        }
    }

    /// Select the option whose value loosely equals the expected one.
    /// When none matches, the prior selection is left untouched.
    pub fn select_matching(&mut self) {
        let Some(expected) = &self.expected else {
            return;
        };
        if let Some(index) = self
            .options
            .iter()
            .position(|option| option.id.loosely_equals(expected))
        {
            self.selected = Some(index);
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(index) = self.selected {
            if index > 0 {
                self.selected = Some(index - 1);
            }
        } else if !self.options.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_next(&mut self) {
        match self.selected {
            Some(index) if index < self.options.len().saturating_sub(1) => {
                self.selected = Some(index + 1);
            }
            None if !self.options.is_empty() => self.selected = Some(0),
            _ => {}
        }
    }

    /// Get the currently selected option
    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.selected.and_then(|index| self.options.get(index))
    }
}

/// The profile form.
///
/// Opens read-only; the edit trigger unlocks every field, aligns both
/// selects with the record values and swaps the trigger pair.
#[derive(Debug)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub telephone: String,
    pub gender: SelectField,
    pub country: SelectField,
    /// Whether the fields accept input
    pub unlocked: bool,
    pub edit_enabled: bool,
    pub submit_enabled: bool,
    /// Focus: 0 = first name, 1 = last name, 2 = telephone,
    /// 3 = gender, 4 = country
    pub focus: usize,
    pub user_id: String,
    pub profile_id: String,
}

impl ProfileForm {
    /// Unlock every field, align the selects with the record values and
    /// swap the trigger pair. Idempotent.
    pub fn begin_edit(&mut self) {
        self.unlocked = true;
        self.gender.select_matching();
        self.country.select_matching();
        self.submit_enabled = true;
        self.edit_enabled = false;
    }
}

/// Profile page state
#[derive(Debug, Default)]
pub struct ProfileState {
    /// The loaded profile form, absent until a profile exists
    pub form: Option<ProfileForm>,
}

impl ProfileState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genders() -> Vec<SelectOption> {
        vec![
            SelectOption::new("1", "Male"),
            SelectOption::new("2", "Female"),
        ]
    }

    fn form() -> ProfileForm {
        ProfileForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            telephone: "555-0100".into(),
            gender: SelectField::new(genders(), Some(ScalarId::new("2"))),
            country: SelectField::new(
                vec![
                    SelectOption::new("33", "France"),
                    SelectOption::new("44", "United Kingdom"),
                ],
                Some(ScalarId::new("44")),
            ),
            unlocked: false,
            edit_enabled: true,
            submit_enabled: false,
            focus: 0,
            user_id: "u1".into(),
            profile_id: "p1".into(),
        }
    }

    #[test]
    fn begin_edit_unlocks_and_aligns_selects() {
        let mut form = form();
        form.begin_edit();

        assert!(form.unlocked);
        assert_eq!(form.gender.selected, Some(1));
        assert_eq!(form.country.selected, Some(1));
        assert!(form.submit_enabled);
        assert!(!form.edit_enabled);
    }

    #[test]
    fn select_matching_ignores_missing_value() {
        let mut field = SelectField::new(genders(), Some(ScalarId::new("9")));
        field.selected = Some(0);
        field.select_matching();
        assert_eq!(field.selected, Some(0));
    }

    #[test]
    fn select_matching_uses_loose_comparison() {
        let mut field = SelectField::new(genders(), Some(ScalarId::new("02")));
        field.select_matching();
        assert_eq!(field.selected, Some(1));
    }
}
