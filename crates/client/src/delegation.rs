//! The ambient child-account context.
//!
//! A [`DelegationContext`] is shared by a client and all of its clones. While it
//! holds a [`Delegation`], every request from those clients carries the matching
//! `X-Child-Account-By-*` header unless the call supplies its own identity.
//!
//! The context is read once per request, when the request is built. Tasks that
//! share a client also share its context, so activating or clearing it in one
//! task changes the identity of requests another task is about to build. For
//! per-task identity pass [`RequestOptions::delegation`](crate::RequestOptions)
//! instead.

use std::sync::{Arc, PoisonError, RwLock};

use printnode_core::Delegation;

#[derive(Debug, Clone, Default)]
pub struct DelegationContext {
    slot: Arc<RwLock<Option<Delegation>>>,
}

impl DelegationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `delegation` ambient until the returned guard is dropped.
    ///
    /// Dropping the guard restores whatever was active before, so scopes nest.
    /// Guards must be dropped in reverse order of activation.
    pub fn activate(&self, delegation: Delegation) -> DelegationGuard {
        tracing::debug!(%delegation, "activating delegation context");
        let previous = self.replace(Some(delegation));
        DelegationGuard {
            context: self.clone(),
            previous,
        }
    }

    /// The identity currently in effect, if any.
    pub fn current(&self) -> Option<Delegation> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clears the context regardless of any outstanding guards.
    pub fn deactivate(&self) {
        self.replace(None);
    }

    fn replace(&self, value: Option<Delegation>) -> Option<Delegation> {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *slot, value)
    }
}

/// Restores the previous delegation when dropped.
#[must_use = "the delegation is cleared as soon as the guard is dropped"]
#[derive(Debug)]
pub struct DelegationGuard {
    context: DelegationContext,
    previous: Option<Delegation>,
}

impl Drop for DelegationGuard {
    fn drop(&mut self) {
        self.context.replace(self.previous.take());
    }
}
