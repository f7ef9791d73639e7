//! School record types.
//!
//! `School` is the persisted row. `NewSchool` is a validated, trimmed
//! candidate that has not been assigned an id yet. `SchoolWithDistance`
//! exists only inside a single list response.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::validator::validate_school;

/// A persisted school record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct School {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A validated candidate record, ready to insert.
///
/// `name` and `address` are already trimmed; coordinates are in range.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewSchool {
    /// Extracts a trimmed record from an arbitrary JSON body.
    ///
    /// Returns `None` iff the validator rejects the input. Fields beyond
    /// the four known ones are ignored.
    pub fn from_value(value: &Value) -> Option<NewSchool> {
        if !validate_school(value) {
            return None;
        }
        Some(NewSchool {
            name: value.get("name")?.as_str()?.trim().to_string(),
            address: value.get("address")?.as_str()?.trim().to_string(),
            latitude: value.get("latitude")?.as_f64()?,
            longitude: value.get("longitude")?.as_f64()?,
        })
    }
}

/// A school annotated with its distance from a query point, in kilometers.
///
/// Serializes flat: the original row fields plus `distance`.
#[derive(Debug, Clone, Serialize)]
pub struct SchoolWithDistance {
    #[serde(flatten)]
    pub school: School,
    pub distance: f64,
}

impl SchoolWithDistance {
    pub fn new(school: School, distance: f64) -> Self {
        Self { school, distance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_trims_name_and_address() {
        let body = json!({
            "name": "  Acme Academy  ",
            "address": "\t1 Main St\n",
            "latitude": 10.0,
            "longitude": 20.0
        });
        let school = NewSchool::from_value(&body).unwrap();
        assert_eq!(school.name, "Acme Academy");
        assert_eq!(school.address, "1 Main St");
        assert_eq!(school.latitude, 10.0);
        assert_eq!(school.longitude, 20.0);
    }

    #[test]
    fn test_from_value_rejects_invalid_body() {
        assert_eq!(NewSchool::from_value(&json!({})), None);
        assert_eq!(
            NewSchool::from_value(&json!({"name": "A", "address": "B", "latitude": 91.0, "longitude": 0.0})),
            None
        );
    }

    #[test]
    fn test_from_value_ignores_extra_fields() {
        let body = json!({
            "name": "Acme",
            "address": "1 Main St",
            "latitude": 1.0,
            "longitude": 2.0,
            "principal": "unexpected"
        });
        assert!(NewSchool::from_value(&body).is_some());
    }

    #[test]
    fn test_with_distance_serializes_flat() {
        let school = School {
            id: 7,
            name: "Acme".to_string(),
            address: "1 Main St".to_string(),
            latitude: 1.0,
            longitude: 2.0,
        };
        let annotated = SchoolWithDistance::new(school, 3.5);
        let value = serde_json::to_value(&annotated).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "Acme");
        assert_eq!(value["distance"], 3.5);
    }
}
