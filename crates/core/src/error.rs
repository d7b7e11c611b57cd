//! Domain error model.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Result type used across the inventory core.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Keep this focused on deterministic domain failures (validation, missing
/// items). The core performs no IO, so there are no IO error kinds here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// One or more input fields failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] FieldErrors),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The targeted item does not exist in the collection.
    ///
    /// Callers always pick items out of the current collection, so hitting
    /// this through the store API indicates a caller bug rather than a
    /// user-facing condition.
    #[error("item not found")]
    ItemNotFound,
}

impl InventoryError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// The per-field messages, when this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            InventoryError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Validation failures keyed by input field, in stable field order.
///
/// A failed validation carries the **full** set of violated fields, not
/// just the first, so a form can flag every invalid input at once. The
/// messages are human-readable and displayed inline next to the named
/// field; they are returned to the caller, never thrown and never logged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-field failure, for the common one-rule case.
    pub fn of(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.set(field, message);
        errors
    }

    /// Record a failure for `field`.
    ///
    /// A later rule writing the same field replaces the earlier message.
    pub fn set(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    /// `Ok(value)` when no field failed, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl core::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
