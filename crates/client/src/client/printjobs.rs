//! Print job API operations.

use printnode_core::{IdSet, PrintJob};

use super::PrintNodeClient;
use crate::error::Result;
use crate::options::RequestOptions;

impl PrintNodeClient {
    /// List all print jobs.
    pub async fn list_print_jobs(&self, options: &RequestOptions) -> Result<Vec<PrintJob>> {
        self.get_json("/printjobs", options).await
    }

    /// Get print job by ID. `None` if the API returns no match.
    pub async fn get_print_job(&self, id: i64, options: &RequestOptions) -> Result<Option<PrintJob>> {
        self.get_first(&format!("/printjobs/{}", id), options).await
    }

    /// Get several print jobs in one request.
    pub async fn get_print_job_set(
        &self,
        ids: &[i64],
        options: &RequestOptions,
    ) -> Result<Vec<PrintJob>> {
        self.get_set("/printjobs", ids, "", options).await
    }

    /// Submit a print job and return the ID the API assigned to it.
    ///
    /// A job with neither a printer nor a printer ID is rejected before anything is sent.
    pub async fn create_print_job(&self, job: &PrintJob, options: &RequestOptions) -> Result<i64> {
        let job = job.prepare_submission()?;
        tracing::debug!(printer_id = job.printer_id, "submitting print job");
        let body = self.post("/printjobs", &job, options).await?;
        Ok(serde_json::from_str(body.trim())?)
    }

    /// Delete print jobs and return the IDs the API actually removed.
    pub async fn delete_print_jobs(
        &self,
        ids: &[i64],
        options: &RequestOptions,
    ) -> Result<Vec<i64>> {
        let set = IdSet::from(ids);
        if set.is_empty() {
            return Ok(Vec::new());
        }
        let body = self
            .delete(&format!("/printjobs/{set}"), options, &[])
            .await?;
        Ok(serde_json::from_str(&body)?)
    }
}
