//! Core domain types for Unitlab.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the platform.

mod ids;
mod module;
mod progress;

pub use ids::StudentId;
pub use module::{Category, Level, ModuleSlug, SlugParseError};
pub use progress::{NewProgress, ProgressPatch, ProgressRecord, Student};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Learner Handle
// ============================================================================

/// A learner's external handle, normalized for key-equality lookups.
///
/// Normalization: surrounding whitespace is stripped, the handle is lowercased,
/// and a single leading `@` is guaranteed. Two spellings of the same handle
/// (`@Zuhra_akylbek`, `zuhra_akylbek `) therefore compare equal and hit the
/// same store row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Handle(String);

#[derive(Debug, Error)]
#[error("learner handle must not be empty")]
pub struct EmptyHandleError;

impl Handle {
    pub fn new(value: impl AsRef<str>) -> Result<Self, EmptyHandleError> {
        let trimmed = value.as_ref().trim();
        let stripped = trimmed.strip_prefix('@').unwrap_or(trimmed);
        if stripped.is_empty() {
            return Err(EmptyHandleError);
        }
        Ok(Self(format!("@{}", stripped.to_lowercase())))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The handle without its leading `@`.
    #[must_use]
    pub fn bare(&self) -> &str {
        &self.0[1..]
    }
}

impl TryFrom<String> for Handle {
    type Error = EmptyHandleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Handle {
    type Error = EmptyHandleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Handle> for String {
    fn from(value: Handle) -> Self {
        value.0
    }
}

impl std::ops::Deref for Handle {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Service Key
// ============================================================================

/// Credential for the remote progress store.
///
/// Note: `Debug` is manually implemented to redact the key value, preventing
/// accidental credential disclosure in logs or error messages.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct ServiceKey(String);

#[derive(Debug, Error)]
#[error("store service key must not be empty")]
pub struct EmptyKeyError;

impl ServiceKey {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyKeyError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyKeyError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ServiceKey {
    type Error = EmptyKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Debug for ServiceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ServiceKey(<redacted>)")
    }
}
