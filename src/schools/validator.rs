//! School input validation.
//!
//! Validation semantics:
//! - `name` and `address` must be JSON strings whose trimmed form is
//!   non-empty
//! - `latitude` must be a JSON number in [-90, 90]
//! - `longitude` must be a JSON number in [-180, 180]
//!
//! A missing field or a wrong JSON type yields `false`, never an error.
//! Undeclared extra fields are accepted and ignored. The validator does
//! not mutate its input and runs before any write reaches the store.

use serde_json::Value;

/// Returns true iff `value` is an acceptable school record.
///
/// Pure predicate over the four known fields; deterministic, no side
/// effects.
pub fn validate_school(value: &Value) -> bool {
    let text_ok = |field: &str| {
        value
            .get(field)
            .and_then(Value::as_str)
            .map(|s| !s.trim().is_empty())
            .unwrap_or(false)
    };
    let coord_ok = |field: &str, min: f64, max: f64| {
        value
            .get(field)
            .and_then(Value::as_f64)
            .map(|v| v >= min && v <= max)
            .unwrap_or(false)
    };

    text_ok("name")
        && text_ok("address")
        && coord_ok("latitude", -90.0, 90.0)
        && coord_ok("longitude", -180.0, 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "name": "Acme Academy",
            "address": "1 Main St",
            "latitude": 10.0,
            "longitude": 20.0
        })
    }

    #[test]
    fn test_accepts_valid_record() {
        assert!(validate_school(&valid_body()));
    }

    #[test]
    fn test_accepts_boundary_coordinates() {
        for (lat, lon) in [(-90.0, -180.0), (90.0, 180.0), (0.0, 0.0)] {
            let mut body = valid_body();
            body["latitude"] = json!(lat);
            body["longitude"] = json!(lon);
            assert!(validate_school(&body), "({}, {}) must be accepted", lat, lon);
        }
    }

    #[test]
    fn test_accepts_integer_coordinates() {
        let mut body = valid_body();
        body["latitude"] = json!(45);
        body["longitude"] = json!(-120);
        assert!(validate_school(&body));
    }

    #[test]
    fn test_rejects_missing_fields() {
        for field in ["name", "address", "latitude", "longitude"] {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove(field);
            assert!(!validate_school(&body), "missing {} must be rejected", field);
        }
    }

    #[test]
    fn test_rejects_empty_and_whitespace_text() {
        for bad in ["", "   ", "\t\n"] {
            let mut body = valid_body();
            body["name"] = json!(bad);
            assert!(!validate_school(&body), "name {:?} must be rejected", bad);

            let mut body = valid_body();
            body["address"] = json!(bad);
            assert!(!validate_school(&body), "address {:?} must be rejected", bad);
        }
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        for (field, bad) in [
            ("latitude", 90.1),
            ("latitude", -90.1),
            ("latitude", 200.0),
            ("longitude", 180.1),
            ("longitude", -180.1),
        ] {
            let mut body = valid_body();
            body[field] = json!(bad);
            assert!(!validate_school(&body), "{} = {} must be rejected", field, bad);
        }
    }

    #[test]
    fn test_rejects_wrong_types() {
        let mut body = valid_body();
        body["name"] = json!(42);
        assert!(!validate_school(&body));

        let mut body = valid_body();
        body["latitude"] = json!("10.0");
        assert!(!validate_school(&body), "numeric strings are not numbers");

        let mut body = valid_body();
        body["longitude"] = json!(null);
        assert!(!validate_school(&body));

        assert!(!validate_school(&json!("not an object")));
        assert!(!validate_school(&json!([1, 2, 3])));
    }
}
