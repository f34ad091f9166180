use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Computer;
use crate::serde::deserialize_null_default;

/// A printer attached to a computer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Printer {
    #[serde(default)]
    pub id: i64,
    /// The host the printer is attached to, when the API includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer: Option<Computer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<PrinterCapabilities>,
    /// Whether this is the computer's default printer, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(
        default,
        alias = "createTimeStamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// What a printer driver reports it can do.
///
/// Print job options are only valid when they match one of these values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrinterCapabilities {
    /// Paper trays or output bins.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub bins: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub collate: bool,
    /// Maximum number of copies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copies: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub color: bool,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub dpis: Vec<String>,
    /// Minimum and maximum paper size, in tenths of a millimetre.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub extent: Vec<Vec<i64>>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub medias: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub nup: Vec<i64>,
    /// Named paper sizes; either dimension may be unknown.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub papers: BTreeMap<String, Vec<Option<i64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printrate: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub supports_custom_paper_size: bool,
}
