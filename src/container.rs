//! Parsing of the JSON share container.
//!
//! The container maps stringified share indices to `{ base, value }` pairs,
//! with one reserved `"keys"` entry declaring the total share count `n` and
//! the threshold `k`:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": 2, "value": "111" }
//! }
//! ```
//!
//! Declaration order of the share entries is preserved (serde_json's
//! `preserve_order` feature) because share selection is order-sensitive.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::share::{RawShare, ReconstructionRequest};

#[derive(Debug, Deserialize)]
struct Keys {
    n: usize,
    k: usize,
}

#[derive(Debug, Deserialize)]
struct EntryBody {
    base: BaseField,
    value: String,
}

/// `base` appears in the wild both as a JSON number and as a numeric string.
/// It stays textual from here on; `Share::decode` is the single place that
/// judges it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BaseField {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl BaseField {
    fn into_text(self) -> String {
        match self {
            BaseField::Integer(v) => v.to_string(),
            BaseField::Float(v) => v.to_string(),
            BaseField::Text(s) => s,
        }
    }
}

/// Parse a JSON share container into a [`ReconstructionRequest`].
pub fn parse_request(input: &str) -> Result<ReconstructionRequest> {
    let root: Value = serde_json::from_str(input)?;
    let map = root
        .as_object()
        .ok_or_else(|| Error::MalformedContainer("top level is not an object".to_string()))?;

    let keys = map
        .get("keys")
        .ok_or_else(|| Error::MalformedContainer("missing \"keys\" entry".to_string()))?;
    let keys: Keys = serde_json::from_value(keys.clone())
        .map_err(|e| Error::MalformedContainer(format!("bad \"keys\" entry: {e}")))?;

    let mut entries = Vec::with_capacity(map.len().saturating_sub(1));
    for (key, body) in map {
        if key == "keys" {
            continue;
        }
        let index: u64 = key.parse().map_err(|_| {
            Error::MalformedContainer(format!("share key {key:?} is not a positive integer"))
        })?;
        if index == 0 {
            return Err(Error::MalformedContainer(format!(
                "share key {key:?} is not a positive integer"
            )));
        }
        let body: EntryBody = serde_json::from_value(body.clone())
            .map_err(|e| Error::MalformedContainer(format!("share {key}: {e}")))?;
        entries.push(RawShare {
            index,
            base: body.base.into_text(),
            digits: body.value,
        });
    }

    ReconstructionRequest::new(keys.n, keys.k, entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_documented_shape() {
        let request = parse_request(
            r#"{
                "keys": { "n": 4, "k": 3 },
                "1": { "base": "10", "value": "4" },
                "2": { "base": "2", "value": "111" },
                "3": { "base": "10", "value": "12" },
                "6": { "base": "4", "value": "213" }
            }"#,
        )
        .unwrap();
        assert_eq!(request.total(), 4);
        assert_eq!(request.threshold(), 3);
        let indices: Vec<u64> = request.entries().iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 6]);
    }

    #[test]
    fn base_may_be_number_or_string() {
        let request = parse_request(
            r#"{
                "keys": { "n": 2, "k": 2 },
                "1": { "base": 10, "value": "4" },
                "2": { "base": "16", "value": "ff" }
            }"#,
        )
        .unwrap();
        assert_eq!(request.entries()[0].base, "10");
        assert_eq!(request.entries()[1].base, "16");
    }

    #[test]
    fn entry_order_is_the_declared_order() {
        let request = parse_request(
            r#"{
                "keys": { "n": 3, "k": 2 },
                "10": { "base": "10", "value": "1" },
                "2": { "base": "10", "value": "2" },
                "1": { "base": "10", "value": "3" }
            }"#,
        )
        .unwrap();
        let indices: Vec<u64> = request.entries().iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![10, 2, 1]);
    }

    #[test]
    fn rejects_missing_keys_entry() {
        let err = parse_request(r#"{ "1": { "base": "10", "value": "4" } }"#).unwrap_err();
        assert!(matches!(err, Error::MalformedContainer(_)));
    }

    #[test]
    fn rejects_non_integer_share_keys() {
        let err = parse_request(
            r#"{
                "keys": { "n": 1, "k": 1 },
                "first": { "base": "10", "value": "4" }
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MalformedContainer(_)));
    }

    #[test]
    fn rejects_entries_without_base_or_value() {
        let err = parse_request(
            r#"{
                "keys": { "n": 1, "k": 1 },
                "1": { "value": "4" }
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MalformedContainer(_)));
    }

    #[test]
    fn rejects_syntactically_broken_json() {
        assert!(matches!(
            parse_request("{ not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn propagates_threshold_violations() {
        let err = parse_request(
            r#"{
                "keys": { "n": 1, "k": 3 },
                "1": { "base": "10", "value": "4" }
            }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::ThresholdOutOfRange { threshold: 3, total: 1 }
        ));
    }

    #[test]
    fn non_integral_numeric_base_survives_to_decode_time() {
        // Shape-wise this is a fine container; the bad base only matters
        // when the share is decoded, where it is skippable.
        let request = parse_request(
            r#"{
                "keys": { "n": 1, "k": 1 },
                "1": { "base": 10.5, "value": "4" }
            }"#,
        )
        .unwrap();
        assert_eq!(request.entries()[0].base, "10.5");
    }
}
