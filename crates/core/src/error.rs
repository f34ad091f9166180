use thiserror::Error;

/// Caller-supplied data that breaks a precondition. Raised before any request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Print job needs either a printer or a non-zero printer ID")]
    MissingPrinter,
    #[error("Child account has no ID")]
    MissingAccountId,
}

/// Errors decoding the child account creation envelope.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("Malformed account envelope: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::MissingPrinter.to_string(),
            "Print job needs either a printer or a non-zero printer ID"
        );
        assert_eq!(
            ValidationError::MissingAccountId.to_string(),
            "Child account has no ID"
        );
    }

    #[test]
    fn test_envelope_error_display() {
        let err = serde_json::from_str::<u8>("nope").unwrap_err();
        let error = EnvelopeError::from(err);
        assert!(error.to_string().starts_with("Malformed account envelope: "));
    }
}
