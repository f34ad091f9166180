use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::EnvelopeError;
use crate::serde::{deserialize_key_names, deserialize_tags};

/// A child account administered through its parent's credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildAccount {
    /// Assigned by the API; ignored on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// Must be unique across PrintNode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Plain text on the way in; never returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// A parent-chosen reference that can address the account later.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_ref: Option<String>,
    /// Names of API keys to create for the account.
    #[serde(
        rename = "ApiKeys",
        default,
        deserialize_with = "deserialize_key_names",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_keys: Option<Vec<String>>,
    #[serde(
        rename = "Tags",
        default,
        deserialize_with = "deserialize_tags",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<BTreeMap<String, String>>,
}

impl ChildAccount {
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            firstname: Some(firstname.into()),
            lastname: Some(lastname.into()),
            email: Some(email.into()),
            password: Some(password.into()),
            ..Default::default()
        }
    }

    pub fn with_creator_ref(mut self, creator_ref: impl Into<String>) -> Self {
        self.creator_ref = Some(creator_ref.into());
        self
    }

    pub fn with_api_keys<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.api_keys = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }
}

/// The body posted to create a child account: `{Account, ApiKeys, Tags}`.
#[derive(Debug, Clone, Serialize)]
pub struct NewChildAccount<'a> {
    #[serde(rename = "Account")]
    pub account: &'a ChildAccount,
    #[serde(rename = "ApiKeys", skip_serializing_if = "Option::is_none")]
    pub api_keys: Option<&'a [String]>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<&'a BTreeMap<String, String>>,
}

impl<'a> From<&'a ChildAccount> for NewChildAccount<'a> {
    fn from(account: &'a ChildAccount) -> Self {
        Self {
            account,
            api_keys: account.api_keys.as_deref(),
            tags: account.tags.as_ref(),
        }
    }
}

/// The creation response. Only the nested `Account` is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountEnvelope {
    #[serde(rename = "Account")]
    pub account: ChildAccount,
}

/// Decodes a creation response into the flat account record.
///
/// The outer envelope is decoded first, then its `Account` field is taken as is.
pub fn parse_created_account(body: &str) -> Result<ChildAccount, EnvelopeError> {
    let envelope: AccountEnvelope = serde_json::from_str(body)?;
    Ok(envelope.account)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_creation_envelope() {
        let account = ChildAccount::new("Ada", "Lovelace", "ada@example.com", "s3cret")
            .with_creator_ref("cust-1")
            .with_api_keys(["development"])
            .with_tag("plan", "gold");

        let body = serde_json::to_value(NewChildAccount::from(&account)).unwrap();
        assert_eq!(body["Account"]["firstname"], "Ada");
        assert_eq!(body["Account"]["creatorRef"], "cust-1");
        assert!(body["Account"].get("id").is_none());
        assert_eq!(body["ApiKeys"], json!(["development"]));
        assert_eq!(body["Tags"], json!({"plan": "gold"}));
    }

    #[test]
    fn test_creation_envelope_without_keys_or_tags() {
        let account = ChildAccount::new("A", "B", "a@b.c", "pw");
        let body = serde_json::to_value(NewChildAccount::from(&account)).unwrap();
        assert!(body.get("ApiKeys").is_none());
        assert!(body.get("Tags").is_none());
    }

    #[test]
    fn test_parse_created_account_unwraps_account() {
        let body = r#"{
            "Account": {
                "id": 1017,
                "firstname": "Ada",
                "lastname": "Lovelace",
                "email": "ada@example.com",
                "creatorRef": "cust-1",
                "state": "active"
            },
            "ApiKeys": {"development": "c9f4..."},
            "Tags": {"plan": "gold"}
        }"#;
        let account = parse_created_account(body).unwrap();
        assert_eq!(account.id, Some(1017));
        assert_eq!(account.creator_ref.as_deref(), Some("cust-1"));
        assert_eq!(account.password, None);
        assert_eq!(account.api_keys, None);
    }

    #[test]
    fn test_parse_created_account_rejects_flat_body() {
        assert!(parse_created_account(r#"{"id": 3}"#).is_err());
    }
}
