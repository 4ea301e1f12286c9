//! Column type classification and value model
//! This crate provides the type tables and value shapes shared across the valuehaus codec

pub mod decl;
pub mod errors;
pub mod sql;
pub mod types;

pub use decl::TypeDecl;
pub use errors::TypeMappingError;
pub use sql::{Category, PureType};
pub use types::{PlainValue, ProcessedValue, RawValue, UserInput};
