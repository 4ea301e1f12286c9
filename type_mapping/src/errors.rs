//! Error types for type classification
//!
//! This module defines the errors raised while turning a column type
//! declaration into a `TypeDecl`.

use thiserror::Error;

/// Type classification errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeMappingError {
    #[error("Unsupported column type: '{0}'")]
    UnsupportedType(String),

    #[error("Malformed type declaration '{declaration}': {reason}")]
    MalformedDeclaration { declaration: String, reason: String },
}
