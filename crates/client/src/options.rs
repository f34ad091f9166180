use printnode_core::Delegation;

/// Per-call overrides.
///
/// A non-empty `api_key` replaces the client's default key for this call.
/// `delegation` replaces the client's ambient delegation context for this call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub api_key: Option<String>,
    pub delegation: Option<Delegation>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Act on behalf of a child account for this call only.
    pub fn on_behalf_of(mut self, delegation: Delegation) -> Self {
        self.delegation = Some(delegation);
        self
    }
}
