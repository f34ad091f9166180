//! Child account API operations.
//!
//! Only a parent account can call these. Apart from `whoami`, they address the
//! child through the `X-Child-Account-By-*` headers.

use printnode_core::{
    parse_created_account, ChildAccount, Delegation, NewChildAccount, ValidationError,
};

use super::PrintNodeClient;
use crate::error::{ClientError, Result};
use crate::options::RequestOptions;

/// Client version and edition reported when requesting a client key.
const CLIENT_KEY_QUERY: &str = "version=4.7.1&edition=printnode";

/// Outcome of [`PrintNodeClient::account_exists`].
#[derive(Debug)]
pub enum AccountExistence {
    /// `/whoami` answered with an account.
    Exists,
    /// The API reported no account for the current identity.
    Missing,
    /// The probe failed for another reason; existence is unknown.
    Unknown(ClientError),
}

impl AccountExistence {
    /// True only when the account was positively seen.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, AccountExistence::Exists)
    }
}

impl PrintNodeClient {
    /// Create a child account, along with any API keys and tags it carries.
    pub async fn create_account(
        &self,
        account: &ChildAccount,
        options: &RequestOptions,
    ) -> Result<ChildAccount> {
        let body = self
            .post("/account", &NewChildAccount::from(account), options)
            .await?;
        let created = parse_created_account(&body)?;
        tracing::info!(id = ?created.id, "created child account");
        Ok(created)
    }

    /// Update a child account from its non-empty fields. The account must carry its ID.
    pub async fn update_account(
        &self,
        account: &ChildAccount,
        options: &RequestOptions,
    ) -> Result<ChildAccount> {
        let id = account.id.ok_or(ValidationError::MissingAccountId)?;
        let body = self
            .patch("/account", account, options, &[Delegation::ById(id).header()])
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Delete a child account. Returns the API's confirmation flag.
    pub async fn delete_account(&self, id: i64, options: &RequestOptions) -> Result<bool> {
        let body = self
            .delete("/account", options, &[Delegation::ById(id).header()])
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Get the key a PrintNode client installation uses to sign in as the current account.
    pub async fn get_account_key(&self, client_id: &str, options: &RequestOptions) -> Result<String> {
        let path = format!(
            "/client/key/{}?{}",
            urlencoding::encode(client_id),
            CLIENT_KEY_QUERY
        );
        self.get_json(&path, options).await
    }

    /// The account the request is authenticated (or delegated) as.
    pub async fn whoami(&self, options: &RequestOptions) -> Result<ChildAccount> {
        self.get_json("/whoami", options).await
    }

    /// Probe `/whoami` to find out whether the current identity has an account.
    pub async fn account_exists(&self, options: &RequestOptions) -> AccountExistence {
        match self.get("/whoami", options).await {
            Ok(body) if body.trim().is_empty() => AccountExistence::Missing,
            Ok(_) => AccountExistence::Exists,
            Err(error) => match error.status() {
                Some(401 | 403 | 404) => AccountExistence::Missing,
                _ => AccountExistence::Unknown(error),
            },
        }
    }
}
