//! Serde helpers for the quirks of the PrintNode wire format.
//!
//! The API sends `null` where an empty collection or a zero would do, and some
//! endpoints answer a single-ID lookup with either an object or an array.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a value, treating `null` as `T::default()`.
///
/// Use with `#[serde(default, deserialize_with = "...")]` so that a missing
/// field also ends up as the default.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Deserialize API key names from either `["name", ...]` or `{"name": "key", ...}`.
///
/// Account creation takes a list of names while responses echo them back as a
/// map of name to generated key.
pub fn deserialize_key_names<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(name) => Ok(name),
                other => Err(D::Error::custom(format!("expected API key name, got {other}"))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(Value::Object(map)) => Ok(Some(map.into_iter().map(|(name, _)| name).collect())),
        Some(other) => Err(D::Error::custom(format!(
            "expected API key names, got {other}"
        ))),
    }
}

/// Deserialize account tags, accepting `[]` for "no tags".
///
/// Non-string tag values are kept in their JSON text form.
pub fn deserialize_tags<'de, D>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) if items.is_empty() => Ok(Some(BTreeMap::new())),
        Some(Value::Object(map)) => Ok(Some(
            map.into_iter()
                .map(|(name, value)| match value {
                    Value::String(text) => (name, text),
                    other => (name, other.to_string()),
                })
                .collect(),
        )),
        Some(other) => Err(D::Error::custom(format!("expected tag map, got {other}"))),
    }
}

/// A response body that is either a single object or an array of them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// The first item, if any.
    pub fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::Many(items) => items.into_iter().next(),
            OneOrMany::One(item) => Some(item),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_null_default")]
        names: Vec<String>,
        #[serde(default, deserialize_with = "deserialize_null_default")]
        count: i64,
    }

    #[test]
    fn test_null_becomes_default() {
        let json = r#"{"names": null, "count": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert!(result.names.is_empty());
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_missing_becomes_default() {
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert!(result.names.is_empty());
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_values_pass_through() {
        let json = r#"{"names": ["a", "b"], "count": 3}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.names, vec!["a", "b"]);
        assert_eq!(result.count, 3);
    }

    #[derive(Debug, Deserialize)]
    struct Account {
        #[serde(default, deserialize_with = "deserialize_key_names")]
        keys: Option<Vec<String>>,
        #[serde(default, deserialize_with = "deserialize_tags")]
        tags: Option<BTreeMap<String, String>>,
    }

    #[test]
    fn test_key_names_from_list_or_map() {
        let listed: Account = serde_json::from_str(r#"{"keys": ["dev", "prod"]}"#).unwrap();
        assert_eq!(listed.keys.unwrap(), vec!["dev", "prod"]);

        let mapped: Account =
            serde_json::from_str(r#"{"keys": {"dev": "abc", "prod": "def"}}"#).unwrap();
        assert_eq!(mapped.keys.unwrap(), vec!["dev", "prod"]);

        let missing: Account = serde_json::from_str("{}").unwrap();
        assert!(missing.keys.is_none());

        assert!(serde_json::from_str::<Account>(r#"{"keys": [1]}"#).is_err());
    }

    #[test]
    fn test_tags_accept_empty_array() {
        let empty: Account = serde_json::from_str(r#"{"tags": []}"#).unwrap();
        assert_eq!(empty.tags, Some(BTreeMap::new()));

        let tagged: Account =
            serde_json::from_str(r#"{"tags": {"plan": "gold", "seats": 4}}"#).unwrap();
        let tags = tagged.tags.unwrap();
        assert_eq!(tags["plan"], "gold");
        assert_eq!(tags["seats"], "4");

        assert!(serde_json::from_str::<Account>(r#"{"tags": ["x"]}"#).is_err());
    }

    #[test]
    fn test_one_or_many() {
        let one: OneOrMany<i64> = serde_json::from_str("4").unwrap();
        assert_eq!(one.into_first(), Some(4));

        let many: OneOrMany<i64> = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(many.clone().into_vec(), vec![1, 2]);
        assert_eq!(many.into_first(), Some(1));

        let empty: OneOrMany<i64> = serde_json::from_str("[]").unwrap();
        assert_eq!(empty.into_first(), None);
    }
}
