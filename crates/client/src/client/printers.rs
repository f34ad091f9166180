//! Printer API operations.

use super::PrintNodeClient;
use crate::error::Result;
use crate::options::RequestOptions;
use printnode_core::{PrintJob, Printer};

impl PrintNodeClient {
    /// List all printers.
    pub async fn list_printers(&self, options: &RequestOptions) -> Result<Vec<Printer>> {
        self.get_json("/printers", options).await
    }

    /// Get printer by ID. `None` if the API returns no match.
    pub async fn get_printer(&self, id: i64, options: &RequestOptions) -> Result<Option<Printer>> {
        self.get_first(&format!("/printers/{}", id), options).await
    }

    /// Get several printers in one request.
    pub async fn get_printer_set(
        &self,
        ids: &[i64],
        options: &RequestOptions,
    ) -> Result<Vec<Printer>> {
        self.get_set("/printers", ids, "", options).await
    }

    /// List the print jobs sent to a printer.
    pub async fn list_printer_print_jobs(
        &self,
        printer_id: i64,
        options: &RequestOptions,
    ) -> Result<Vec<PrintJob>> {
        self.get_json(&format!("/printers/{}/printjobs", printer_id), options)
            .await
    }

    /// Send `job` to `printer`. The job's printer ID is overwritten with the printer's.
    pub async fn add_print_job(
        &self,
        printer: &Printer,
        mut job: PrintJob,
        options: &RequestOptions,
    ) -> Result<i64> {
        job.printer_id = printer.id;
        self.create_print_job(&job, options).await
    }
}
