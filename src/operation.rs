//! Operation identifiers: the permission tokens a route can require.

use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

/// One permission token, e.g. `SYSTEM_MODEL_GRAPHICS`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct OperationId(Cow<'static, str>);

impl OperationId {
    pub const fn from_static(token: &'static str) -> Self {
        OperationId(Cow::Borrowed(token))
    }

    pub fn new(token: impl Into<String>) -> Self {
        OperationId(Cow::Owned(token.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const SYSTEM_TOPOLOGY: OperationId = OperationId::from_static("SYSTEM_TOPOLOGY");
pub const SYSTEM_MODEL_GRAPHICS: OperationId = OperationId::from_static("SYSTEM_MODEL_GRAPHICS");
pub const C_MODEL_GROUP: OperationId = OperationId::from_static("C_MODEL_GROUP");
pub const U_MODEL_GROUP: OperationId = OperationId::from_static("U_MODEL_GROUP");
pub const D_MODEL_GROUP: OperationId = OperationId::from_static("D_MODEL_GROUP");
pub const C_MODEL: OperationId = OperationId::from_static("C_MODEL");
pub const U_MODEL: OperationId = OperationId::from_static("U_MODEL");
pub const D_MODEL: OperationId = OperationId::from_static("D_MODEL");
pub const C_RELATION: OperationId = OperationId::from_static("C_RELATION");
pub const U_RELATION: OperationId = OperationId::from_static("U_RELATION");
pub const D_RELATION: OperationId = OperationId::from_static("D_RELATION");

const BUILTIN: [OperationId; 11] = [
    SYSTEM_TOPOLOGY,
    SYSTEM_MODEL_GRAPHICS,
    C_MODEL_GROUP,
    U_MODEL_GROUP,
    D_MODEL_GROUP,
    C_MODEL,
    U_MODEL,
    D_MODEL,
    C_RELATION,
    U_RELATION,
    D_RELATION,
];

/// The set of operation identifiers the application knows about.
///
/// Route descriptors may only require operations from this set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationCatalog {
    known: BTreeSet<OperationId>,
}

impl OperationCatalog {
    pub fn contains(&self, operation: &OperationId) -> bool {
        self.known.contains(operation)
    }

    /// Looks up a raw token, returning the catalog's identifier for it.
    pub fn lookup(&self, token: &str) -> Option<&OperationId> {
        self.known.iter().find(|op| op.as_str() == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OperationId> {
        self.known.iter()
    }
}

impl Default for OperationCatalog {
    fn default() -> Self {
        OperationCatalog {
            known: BUILTIN.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl OperationCatalog {
    pub fn empty() -> Self {
        OperationCatalog {
            known: BTreeSet::new(),
        }
    }
}

impl Extend<OperationId> for OperationCatalog {
    fn extend<T: IntoIterator<Item = OperationId>>(&mut self, iter: T) {
        self.known.extend(iter);
    }
}
