//! printnode_client - Async client for the PrintNode API.
//!
//! Wraps the REST endpoints for computers, printers, print jobs, print job
//! states, scales and child accounts. Requests authenticate with an API key
//! and may act on behalf of a child account, either per call through
//! [`RequestOptions`] or for a scope through [`PrintNodeClient::delegate`].

pub mod client;
pub mod config;
pub mod credentials;
pub mod delegation;
pub mod error;
pub mod http;
pub mod options;

pub use client::accounts::AccountExistence;
pub use client::PrintNodeClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use crate::http::{HttpSend, ReqwestHttpSend};
pub use delegation::{DelegationContext, DelegationGuard};
pub use error::{ClientError, Result};
pub use options::RequestOptions;

pub use printnode_core::{
    ChildAccount, Computer, ContentType, Delegation, PrintJob, PrintJobAuthentication,
    PrintJobOptions, PrintJobState, Printer, PrinterCapabilities, Scale, ScaleMeasurement,
    ValidationError,
};
