//! Child account addressing.
//!
//! A parent account can act on behalf of one of its child accounts by sending
//! exactly one `X-Child-Account-By-*` header alongside its own API key.

use std::fmt;

pub const HEADER_CHILD_BY_ID: &str = "X-Child-Account-By-Id";
pub const HEADER_CHILD_BY_EMAIL: &str = "X-Child-Account-By-Email";
pub const HEADER_CHILD_BY_CREATOR_REF: &str = "X-Child-Account-By-CreatorRef";

/// Every header name that selects a child account.
pub const DELEGATION_HEADERS: [&str; 3] = [
    HEADER_CHILD_BY_ID,
    HEADER_CHILD_BY_EMAIL,
    HEADER_CHILD_BY_CREATOR_REF,
];

/// Identifies the child account a request acts on behalf of.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Delegation {
    /// By numeric account ID.
    ById(i64),
    /// By the account's email address.
    ByEmail(String),
    /// By the reference the parent supplied when creating the account.
    ByCreatorRef(String),
}

impl Delegation {
    pub fn by_id(id: i64) -> Self {
        Self::ById(id)
    }

    pub fn by_email(email: impl Into<String>) -> Self {
        Self::ByEmail(email.into())
    }

    pub fn by_creator_ref(creator_ref: impl Into<String>) -> Self {
        Self::ByCreatorRef(creator_ref.into())
    }

    /// The header that carries this identity.
    pub fn header_name(&self) -> &'static str {
        match self {
            Delegation::ById(_) => HEADER_CHILD_BY_ID,
            Delegation::ByEmail(_) => HEADER_CHILD_BY_EMAIL,
            Delegation::ByCreatorRef(_) => HEADER_CHILD_BY_CREATOR_REF,
        }
    }

    /// The header value, exactly as stored.
    pub fn header_value(&self) -> String {
        match self {
            Delegation::ById(id) => id.to_string(),
            Delegation::ByEmail(email) => email.clone(),
            Delegation::ByCreatorRef(creator_ref) => creator_ref.clone(),
        }
    }

    /// Returns the `(name, value)` header pair.
    pub fn header(&self) -> (&'static str, String) {
        (self.header_name(), self.header_value())
    }
}

impl fmt::Display for Delegation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.header_name(), self.header_value())
    }
}

/// Returns true if `name` is one of the child account headers (case-insensitive).
pub fn is_delegation_header(name: &str) -> bool {
    DELEGATION_HEADERS
        .iter()
        .any(|header| header.eq_ignore_ascii_case(name))
}
