//! Computer API operations.

use super::PrintNodeClient;
use crate::error::Result;
use crate::options::RequestOptions;
use printnode_core::{Computer, Printer};

impl PrintNodeClient {
    /// List all computers.
    pub async fn list_computers(&self, options: &RequestOptions) -> Result<Vec<Computer>> {
        self.get_json("/computers", options).await
    }

    /// Get computer by ID. `None` if the API returns no match.
    pub async fn get_computer(&self, id: i64, options: &RequestOptions) -> Result<Option<Computer>> {
        self.get_first(&format!("/computers/{}", id), options)
            .await
    }

    /// Get several computers in one request.
    pub async fn get_computer_set(
        &self,
        ids: &[i64],
        options: &RequestOptions,
    ) -> Result<Vec<Computer>> {
        self.get_set("/computers", ids, "", options).await
    }

    /// List the printers attached to one or more computers.
    pub async fn list_computer_printers(
        &self,
        computer_ids: &[i64],
        options: &RequestOptions,
    ) -> Result<Vec<Printer>> {
        self.get_set("/computers", computer_ids, "/printers", options)
            .await
    }
}
