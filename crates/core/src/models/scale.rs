use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde::deserialize_null_default;

/// A reading from a scale attached to a computer.
///
/// Values pass through exactly as the device reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    /// `(mass, resolution)` in micrograms. Either is `None` when the scale
    /// could not produce it, typically while showing a negative weight.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub mass: (Option<i64>, Option<i64>),
    #[serde(default)]
    pub device_name: String,
    /// Distinguishes identical devices on one computer; zero based.
    #[serde(default)]
    pub device_num: i64,
    /// Connection, e.g. `USB1` or `COM0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Item count for counting scales.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(default)]
    pub measurement: ScaleMeasurement,
    #[serde(
        default,
        alias = "clientReportedCreateTimeStamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_reported_create_timestamp: Option<DateTime<Utc>>,
    /// Client clock error in milliseconds, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ntp_offset: Option<i64>,
    /// Milliseconds the reading was held by PrintNode before delivery.
    #[serde(default)]
    pub age_of_data: i64,
    #[serde(default)]
    pub computer_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<i64>,
}

impl Scale {
    /// Mass in micrograms, if the scale produced one.
    pub fn mass_micrograms(&self) -> Option<i64> {
        self.mass.0
    }

    /// Resolution in micrograms, if known.
    pub fn resolution_micrograms(&self) -> Option<i64> {
        self.mass.1
    }
}

/// The display value for each unit on the scale, in millionths of that unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleMeasurement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub g: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kg: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lb: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oz: Option<i64>,
}
