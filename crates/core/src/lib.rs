//! printnode_core - Pure types and helpers for the PrintNode API.
//!
//! Nothing in this crate performs I/O. The HTTP side lives in `printnode_client`.

pub mod delegation;
pub mod error;
pub mod ids;
pub mod models;
pub mod serde;

pub use delegation::{
    is_delegation_header, Delegation, DELEGATION_HEADERS, HEADER_CHILD_BY_CREATOR_REF,
    HEADER_CHILD_BY_EMAIL, HEADER_CHILD_BY_ID,
};
pub use error::{EnvelopeError, ValidationError};
pub use ids::{encode_ids, IdSet};
pub use models::{
    parse_created_account, AccountEnvelope, AuthenticationType, ChildAccount, Computer,
    ContentType, NewChildAccount, PrintJob, PrintJobAuthentication, PrintJobCredentials,
    PrintJobOptions, PrintJobState, Printer, PrinterCapabilities, Scale, ScaleMeasurement,
};
