//! String-or-number wire scalar

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier scalar as the service sends it.
///
/// The wire format is loose: the same field arrives as `2` from one
/// endpoint and `"2"` from another. `ScalarId` accepts both and offers
/// [`ScalarId::loosely_equals`], a normalizing comparison that matches
/// numeric values regardless of their wire spelling. Non-numeric values
/// fall back to exact string comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScalarId(String);

impl ScalarId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Normalizing comparison: numeric when both sides parse as
    /// integers, exact string comparison otherwise.
    #[must_use]
    pub fn loosely_equals(&self, other: &Self) -> bool {
        match (self.0.trim().parse::<i64>(), other.0.trim().parse::<i64>()) {
            (Ok(a), Ok(b)) => a == b,
            _ => self.0 == other.0,
        }
    }
}

impl fmt::Display for ScalarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScalarId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ScalarId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Serialize for ScalarId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ScalarId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarVisitor;

        impl Visitor<'_> for ScalarVisitor {
            type Value = ScalarId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer identifier")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ScalarId::new(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ScalarId::new(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ScalarId::new(v.to_string()))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_string_matches_number() {
        assert!(ScalarId::new("2").loosely_equals(&ScalarId::new("2")));
        // "02" and "2" are the same numeric value
        assert!(ScalarId::new("02").loosely_equals(&ScalarId::new("2")));
    }

    #[test]
    fn different_numbers_do_not_match() {
        assert!(!ScalarId::new("9").loosely_equals(&ScalarId::new("2")));
    }

    #[test]
    fn non_numeric_falls_back_to_string_equality() {
        assert!(ScalarId::new("F").loosely_equals(&ScalarId::new("F")));
        assert!(!ScalarId::new("F").loosely_equals(&ScalarId::new("M")));
    }

    #[test]
    fn deserializes_from_number_and_string() {
        let from_number: ScalarId = serde_json::from_str("2").unwrap();
        let from_string: ScalarId = serde_json::from_str("\"2\"").unwrap();
        assert!(from_number.loosely_equals(&from_string));
    }
}
