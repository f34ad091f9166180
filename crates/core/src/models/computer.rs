use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A machine running the PrintNode client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Computer {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inet6: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Java runtime version reported by the client, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jre: Option<String>,
    #[serde(
        default,
        alias = "createTimeStamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_timestamp: Option<DateTime<Utc>>,
    /// `connected`, `disconnected`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_payload() {
        let json = r#"{
            "id": 14,
            "name": "TUNGSTEN",
            "inet": "192.168.56.1",
            "inet6": null,
            "hostname": "Pete@TUNGSTEN",
            "jre": null,
            "createTimestamp": "2015-10-14T15:35:41.539Z",
            "state": "disconnected"
        }"#;
        let computer: Computer = serde_json::from_str(json).unwrap();
        assert_eq!(computer.id, 14);
        assert_eq!(computer.name.as_deref(), Some("TUNGSTEN"));
        assert_eq!(computer.inet6, None);
        assert_eq!(computer.hostname.as_deref(), Some("Pete@TUNGSTEN"));
        assert!(computer.create_timestamp.is_some());
        assert_eq!(computer.state.as_deref(), Some("disconnected"));
    }

    #[test]
    fn test_timestamp_accepts_capitalized_stamp() {
        let computer: Computer =
            serde_json::from_str(r#"{"id": 1, "createTimeStamp": "2015-10-14T15:35:41.539Z"}"#)
                .unwrap();
        assert!(computer.create_timestamp.is_some());
    }

    #[test]
    fn test_null_fields_are_omitted_and_restored_as_default() {
        let computer = Computer {
            id: 3,
            name: Some("office".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&computer).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "name": "office"}));

        let back: Computer = serde_json::from_value(json).unwrap();
        assert_eq!(back, computer);
        assert_eq!(back.state, None);
    }
}
