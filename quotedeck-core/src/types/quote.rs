//! Quote and category types

use serde::{Deserialize, Serialize};

use super::ScalarId;

/// One quote record as returned by the read endpoint (`GET /quotes/{id}`).
///
/// Requested when the view/edit modal opens, discarded when it closes;
/// never cached and never mutated client-side except through form
/// submission to `quote_url`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRecord {
    /// Quote text
    pub quote: String,
    /// Author name
    pub author: String,
    /// Category identifier; arrives as either a number or a string
    pub category_id: ScalarId,
    /// Canonical submission URL for updating this record
    pub quote_url: String,
}

/// List entry from `GET /api/v1/quotes`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteSummary {
    /// Record identifier, used to build the read request path
    pub id: ScalarId,
    pub quote: String,
    pub author: String,
    /// Category display name
    pub category: String,
}

/// One entry of the category option set.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: ScalarId,
    /// Display name (the service calls this column `category`)
    #[serde(rename = "category")]
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<ScalarId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Payload for `POST /quotes/add`, form-encoded.
#[derive(Debug, Clone, Serialize)]
pub struct NewQuote {
    pub quote: String,
    pub author: String,
    pub category_id: ScalarId,
}

/// Payload for the update submission, form-encoded.
///
/// Posted to the `quote_url` the fetched record supplied; the client
/// never rebuilds that URL itself.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteUpdate {
    pub quote: String,
    pub author: String,
    pub category_id: ScalarId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accepts_numeric_category_id() {
        let json = r#"{
            "quote": "Stay hungry",
            "author": "Steve Jobs",
            "category_id": 2,
            "quote_url": "/quotes/update/q1"
        }"#;
        let record: QuoteRecord = serde_json::from_str(json).unwrap();
        assert!(record.category_id.loosely_equals(&ScalarId::new("2")));
        assert_eq!(record.quote_url, "/quotes/update/q1");
    }

    #[test]
    fn record_accepts_string_category_id() {
        let json = r#"{
            "quote": "Stay hungry",
            "author": "Steve Jobs",
            "category_id": "2",
            "quote_url": "/quotes/update/q1"
        }"#;
        let record: QuoteRecord = serde_json::from_str(json).unwrap();
        assert!(record.category_id.loosely_equals(&ScalarId::new("2")));
    }

    #[test]
    fn category_renames_wire_column() {
        let json = r#"{"id": "c1", "category": "General"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.name, "General");
    }
}
