//! Profile types

use serde::{Deserialize, Serialize};

use super::ScalarId;

/// One entry of a selection control's option set (gender, country).
#[derive(Debug, Clone, Deserialize)]
pub struct SelectOption {
    pub id: ScalarId,
    pub label: String,
}

impl SelectOption {
    pub fn new(id: impl Into<ScalarId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Payload for the profile update submission, form-encoded.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub telephone: String,
    pub gender_id: ScalarId,
    pub country_id: ScalarId,
}
