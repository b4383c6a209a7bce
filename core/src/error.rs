//! Error types for the form state container and option parsing.
//!
//! # Design
//! The command formatter itself is total and never fails. Errors only come
//! from the edges: text that must be parsed into a method, data format or
//! header, JSON option documents, and header-row actions that point past the
//! end of the list.

use std::fmt;

/// Errors returned by option parsing and `FormState::dispatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A header action referenced a row that does not exist.
    HeaderIndexOutOfRange { index: usize, len: usize },

    /// The method name is not one of the supported HTTP methods.
    UnknownMethod(String),

    /// The data format name is not `raw`, `binary` or `urlencoded`.
    UnknownDataFormat(String),

    /// Header text did not have the `Key: Value` shape.
    MalformedHeader(String),

    /// A JSON options document could not be deserialized.
    DeserializationError(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::HeaderIndexOutOfRange { index, len } => {
                write!(f, "header index {index} out of range (have {len})")
            }
            FormError::UnknownMethod(name) => write!(f, "unknown HTTP method: {name}"),
            FormError::UnknownDataFormat(name) => {
                write!(f, "unknown data format: {name} (expected raw, binary or urlencoded)")
            }
            FormError::MalformedHeader(text) => {
                write!(f, "malformed header {text:?}: expected \"Key: Value\"")
            }
            FormError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for FormError {}
