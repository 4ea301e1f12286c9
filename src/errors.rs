//! Error types for the Valuehaus crate
//!
//! This module contains all error types that can be returned by codec operations.

use byte_codec::ByteCodecError;
use geometry_codec::GeometryError;
use thiserror::Error;
use type_mapping::{Category, PureType, TypeMappingError};

#[derive(Error, Debug)]
pub enum ValuehausError {
    #[error("Type classification error: {0}")]
    TypeMapping(#[from] TypeMappingError),

    #[error("Bit conversion error: {0}")]
    ByteCodec(#[from] ByteCodecError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid {pure_type} value: '{value}'")]
    InvalidTemporal { pure_type: PureType, value: String },

    #[error("Cannot encode {input} input for a {category:?} column")]
    InputMismatch {
        category: Category,
        input: &'static str,
    },
}

impl ValuehausError {
    /// The classifier rejected the type name
    pub fn is_unsupported_type(&self) -> bool {
        matches!(
            self,
            ValuehausError::TypeMapping(TypeMappingError::UnsupportedType(_))
        )
    }

    /// The geometry discriminant is not one of the supported shapes
    pub fn is_unknown_spatial_type(&self) -> bool {
        matches!(
            self,
            ValuehausError::Geometry(GeometryError::UnknownSpatialType(_))
        )
    }

    /// A bit length was zero, negative or fractional
    pub fn is_invalid_bit_length(&self) -> bool {
        matches!(
            self,
            ValuehausError::ByteCodec(ByteCodecError::InvalidBitLength(_))
        )
    }
}
