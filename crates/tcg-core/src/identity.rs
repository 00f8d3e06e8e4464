//! # Identity Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout the TCG stack.
//! Each identifier is a distinct type: you cannot pass a [`TestCaseId`]
//! where a [`ProcessingId`] is expected. UUID-based identifiers are always
//! valid by construction.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier for a generated test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestCaseId(Uuid);

impl TestCaseId {
    /// Create a new random test case identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a test case identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TestCaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TestCaseId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TestCaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TestCaseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s).map(Self)
    }
}

/// A unique identifier for a single privacy-stamping operation.
///
/// One is minted per [`stamp`] call and recorded both in the payload's
/// metadata block and in the processing log, tying the two together.
///
/// [`stamp`]: https://docs.rs/tcg-privacy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessingId(Uuid);

impl ProcessingId {
    /// Create a new random processing identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a processing identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProcessingId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProcessingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
