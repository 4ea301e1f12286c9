//! Convenience re-exports for common Valuehaus usage
//!
//! # Example
//!
//! ```rust
//! use valuehaus::prelude::*;
//!
//! let decl = TypeDecl::parse("set('a','b','c')").unwrap();
//! assert_eq!(decl.category(), Category::EnumSet);
//! ```

// Core Valuehaus components
pub use crate::core::ValueCodec;
pub use crate::decoder::Decoder;
pub use crate::encoder::Encoder;
pub use crate::errors::ValuehausError;

// Re-export centralized config
pub use config::{CodecConfig, DisplayConfig, TemporalConfig};

// Type classification and value model
pub use type_mapping::{
    Category, PlainValue, ProcessedValue, PureType, RawValue, TypeDecl, TypeMappingError,
    UserInput,
};

// Codecs
pub use byte_codec::{bit_string_to_bytes, bytes_to_padded_bit_string, BitLength, ByteCodecError};
pub use geometry_codec::{GeometryError, GeometryNode, Position};
