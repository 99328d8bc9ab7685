//! Authorization metadata attached to routes, and the seam to whatever
//! decides whether a principal may see them.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::operation::OperationId;

/// Operations required to display or access a route's menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthMeta {
    operations: BTreeSet<OperationId>,
}

impl AuthMeta {
    /// Callers are expected to go through `RouteDescriptor::builder`, which
    /// checks the set against the operation catalog.
    pub(crate) fn new(operations: BTreeSet<OperationId>) -> Self {
        AuthMeta { operations }
    }

    pub fn operations(&self) -> &BTreeSet<OperationId> {
        &self.operations
    }
}

/// Decides whether the current principal satisfies a route's requirements.
pub trait Authorizer: Send + Sync {
    fn is_allowed(&self, required: &AuthMeta) -> bool;
}

/// A principal's granted operations. Access needs every required one.
#[derive(Debug, Clone, Default)]
pub struct GrantedOperations {
    granted: BTreeSet<OperationId>,
}

impl GrantedOperations {
    pub fn new(granted: impl IntoIterator<Item = OperationId>) -> Self {
        GrantedOperations {
            granted: granted.into_iter().collect(),
        }
    }
}

impl Authorizer for GrantedOperations {
    fn is_allowed(&self, required: &AuthMeta) -> bool {
        required.operations.is_subset(&self.granted)
    }
}

/// Grants everything. Used when the menu is rendered without a principal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl Authorizer for AllowAll {
    fn is_allowed(&self, _required: &AuthMeta) -> bool {
        true
    }
}

/// A route with no auth block is visible to everyone.
pub fn permits(authorizer: &dyn Authorizer, auth: Option<&AuthMeta>) -> bool {
    auth.is_none_or(|required| authorizer.is_allowed(required))
}
