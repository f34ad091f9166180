use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Printer;
use crate::error::ValidationError;

/// How `PrintJob::content` should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// A URI the client fetches a PDF from.
    PdfUri,
    /// A base64-encoded PDF.
    PdfBase64,
    /// A URI the client fetches raw printer data from.
    RawUri,
    /// Base64-encoded raw printer data.
    RawBase64,
}

impl ContentType {
    /// True when the content is fetched from a URI by the client.
    pub fn is_uri(self) -> bool {
        matches!(self, ContentType::PdfUri | ContentType::RawUri)
    }
}

/// A unit of print work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintJob {
    /// Assigned by the API; ignored on submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub printer_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printer: Option<Printer>,
    /// Name shown in the operating system's print queue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Free-text description of where the job came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<PrintJobOptions>,
    /// Seconds to keep retrying delivery. The API defaults to 14 days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_after: Option<i64>,
    /// How many times the job is delivered to the print queue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<PrintJobAuthentication>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_timestamp: Option<DateTime<Utc>>,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl PrintJob {
    fn with_content(
        printer_id: i64,
        title: impl Into<String>,
        content_type: ContentType,
        content: String,
    ) -> Self {
        Self {
            printer_id,
            title: Some(title.into()),
            content_type: Some(content_type),
            content: Some(content),
            ..Default::default()
        }
    }

    /// A PDF the client downloads from `uri`.
    pub fn pdf_uri(printer_id: i64, title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::with_content(printer_id, title, ContentType::PdfUri, uri.into())
    }

    /// An inline PDF; `pdf` is base64-encoded here.
    pub fn pdf_base64(printer_id: i64, title: impl Into<String>, pdf: impl AsRef<[u8]>) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD.encode(pdf);
        Self::with_content(printer_id, title, ContentType::PdfBase64, encoded)
    }

    /// Raw printer data the client downloads from `uri`.
    pub fn raw_uri(printer_id: i64, title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::with_content(printer_id, title, ContentType::RawUri, uri.into())
    }

    /// Inline raw printer data (ZPL, ESC/POS, ...); `data` is base64-encoded here.
    pub fn raw_base64(printer_id: i64, title: impl Into<String>, data: impl AsRef<[u8]>) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD.encode(data);
        Self::with_content(printer_id, title, ContentType::RawBase64, encoded)
    }

    pub fn with_printer(mut self, printer: Printer) -> Self {
        self.printer = Some(printer);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_options(mut self, options: PrintJobOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_qty(mut self, qty: u32) -> Self {
        self.qty = Some(qty);
        self
    }

    pub fn with_expire_after(mut self, seconds: i64) -> Self {
        self.expire_after = Some(seconds);
        self
    }

    /// Credentials the client presents when fetching URI content.
    pub fn with_authentication(mut self, authentication: PrintJobAuthentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    /// The printer this job targets: the explicit ID, else the embedded printer's ID.
    pub fn target_printer_id(&self) -> Option<i64> {
        if self.printer_id != 0 {
            return Some(self.printer_id);
        }
        self.printer.as_ref().map(|printer| printer.id)
    }

    /// Checks the job names a printer.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingPrinter`] when there is no embedded
    /// printer and `printer_id` is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.printer.is_none() && self.printer_id == 0 {
            return Err(ValidationError::MissingPrinter);
        }
        Ok(())
    }

    /// Returns the job as it should be submitted, with `printer_id` stamped
    /// from the embedded printer when only the latter is set.
    pub fn prepare_submission(&self) -> Result<PrintJob, ValidationError> {
        self.validate()?;
        let mut job = self.clone();
        if job.printer_id == 0 {
            if let Some(id) = job.target_printer_id() {
                job.printer_id = id;
            }
        }
        Ok(job)
    }
}

/// Formatting options. Ignored by the client for raw content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintJobOptions {
    /// Paper tray, one of the printer's `bins`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copies: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpi: Option<String>,
    /// `long-edge` or `short-edge`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplex: Option<String>,
    /// OSX only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_to_page: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    /// Pages per sheet. OSX only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nup: Option<u32>,
    /// Page set such as `1,3-`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper: Option<String>,
    /// 90, 180 or 270.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthenticationType {
    BasicAuth,
    DigestAuth,
}

/// HTTP credentials for URI content behind Basic or Digest authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintJobAuthentication {
    #[serde(rename = "type")]
    pub kind: AuthenticationType,
    pub credentials: PrintJobCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintJobCredentials {
    pub user: String,
    pub pass: String,
}

impl PrintJobAuthentication {
    pub fn basic(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self::new(AuthenticationType::BasicAuth, user, pass)
    }

    pub fn digest(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self::new(AuthenticationType::DigestAuth, user, pass)
    }

    fn new(kind: AuthenticationType, user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            kind,
            credentials: PrintJobCredentials {
                user: user.into(),
                pass: pass.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pdf_uri_wire_format() {
        let job = PrintJob::pdf_uri(5, "Invoice 1001", "https://example.com/1001.pdf")
            .with_source("billing")
            .with_authentication(PrintJobAuthentication::digest("bob", "hunter2"));

        assert_eq!(
            serde_json::to_value(&job).unwrap(),
            json!({
                "printerId": 5,
                "title": "Invoice 1001",
                "contentType": "pdf_uri",
                "content": "https://example.com/1001.pdf",
                "source": "billing",
                "authentication": {
                    "type": "DigestAuth",
                    "credentials": {"user": "bob", "pass": "hunter2"}
                }
            })
        );
    }

    #[test]
    fn test_base64_constructors_encode_content() {
        let pdf = PrintJob::pdf_base64(1, "doc", b"%PDF-1.4");
        assert_eq!(pdf.content_type, Some(ContentType::PdfBase64));
        assert_eq!(pdf.content.as_deref(), Some("JVBERi0xLjQ="));

        let raw = PrintJob::raw_base64(1, "label", "^XA^XZ");
        assert_eq!(raw.content_type, Some(ContentType::RawBase64));
        assert_eq!(raw.content.as_deref(), Some("XlhBXlha"));
        assert!(!ContentType::RawBase64.is_uri());
        assert!(ContentType::RawUri.is_uri());
    }

    #[test]
    fn test_options_wire_names() {
        let options = PrintJobOptions {
            copies: Some(2),
            fit_to_page: Some(false),
            duplex: Some("long-edge".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"copies": 2, "duplex": "long-edge", "fit_to_page": false})
        );
    }

    #[test]
    fn test_validate_requires_printer() {
        let job = PrintJob::default();
        assert_eq!(job.validate(), Err(ValidationError::MissingPrinter));
        assert_eq!(job.target_printer_id(), None);

        let job = PrintJob::raw_uri(9, "x", "https://example.com/x.zpl");
        assert_eq!(job.validate(), Ok(()));
    }

    #[test]
    fn test_prepare_submission_stamps_embedded_printer_id() {
        let printer = Printer {
            id: 77,
            ..Default::default()
        };
        let job = PrintJob::pdf_uri(0, "x", "https://example.com/x.pdf").with_printer(printer);

        let prepared = job.prepare_submission().unwrap();
        assert_eq!(prepared.printer_id, 77);
        assert_eq!(job.printer_id, 0);
    }

    #[test]
    fn test_explicit_printer_id_wins() {
        let printer = Printer {
            id: 77,
            ..Default::default()
        };
        let job = PrintJob::pdf_uri(3, "x", "https://example.com/x.pdf").with_printer(printer);
        assert_eq!(job.target_printer_id(), Some(3));
        assert_eq!(job.prepare_submission().unwrap().printer_id, 3);
    }

    #[test]
    fn test_deserialize_listed_job() {
        let json = r#"{
            "id": 473,
            "printer": {"id": 33, "computer": {"id": 10}},
            "title": "Print Job 1",
            "contentType": "pdf_uri",
            "source": "Google",
            "state": "done",
            "createTimestamp": "2015-11-16T23:14:12.354Z"
        }"#;
        let job: PrintJob = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, Some(473));
        assert_eq!(job.printer_id, 0);
        assert_eq!(job.target_printer_id(), Some(33));
        assert_eq!(job.state.as_deref(), Some("done"));
        assert!(job.content.is_none());
    }
}
