//! Error handling for the sharedvar crates.
//!
//! Extraction from a `Variant` is soft by default: a mismatch yields a default
//! value. These errors back the opt-in `try_*` accessors for callers that want
//! the mismatch reported instead.

use thiserror::Error;

use crate::type_info::TypeInfo;

/// Error raised by checked extraction from a type-erased value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    #[error("Variant is empty, expected a value of type {expected}")]
    Empty { expected: TypeInfo },

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: TypeInfo, found: TypeInfo },
}

/// Result type alias for checked extraction.
pub type Result<T> = std::result::Result<T, VariantError>;

impl VariantError {
    /// Create an empty-variant error for an extraction of `expected`.
    pub fn empty(expected: TypeInfo) -> Self {
        Self::Empty { expected }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(expected: TypeInfo, found: TypeInfo) -> Self {
        Self::TypeMismatch { expected, found }
    }

    /// Check if the error was raised on an empty variant.
    pub fn is_empty_error(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// Check if the error was raised on a held value of another type.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// The type the caller asked for.
    pub fn expected(&self) -> TypeInfo {
        match self {
            Self::Empty { expected } | Self::TypeMismatch { expected, .. } => *expected,
        }
    }

    /// The type actually held, if any.
    pub fn found(&self) -> Option<TypeInfo> {
        match self {
            Self::Empty { .. } => None,
            Self::TypeMismatch { found, .. } => Some(*found),
        }
    }
}
