//! Data-transfer records for the remote resources.
//!
//! Records map 1:1 onto the API's JSON objects. Serialization omits `None`
//! fields; deserialization fills missing fields with defaults.

mod account;
mod computer;
mod printer;
mod printjob;
mod scale;
mod state;

pub use account::{parse_created_account, AccountEnvelope, ChildAccount, NewChildAccount};
pub use computer::Computer;
pub use printer::{Printer, PrinterCapabilities};
pub use printjob::{
    AuthenticationType, ContentType, PrintJob, PrintJobAuthentication, PrintJobCredentials,
    PrintJobOptions,
};
pub use scale::{Scale, ScaleMeasurement};
pub use state::PrintJobState;
