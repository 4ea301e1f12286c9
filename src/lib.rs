//! # Valuehaus
//!
//! A column value codec for MySQL-family databases: classifies column type
//! declarations, renders raw driver values as display text, and encodes user
//! input into wire-ready values for the query builder.
//!
//! ## Quick Start
//!
//! ```rust
//! use valuehaus::prelude::*;
//!
//! fn main() -> Result<(), ValuehausError> {
//!     let codec = ValueCodec::default();
//!
//!     let bits = codec.classify("bit(8)")?;
//!     assert_eq!(
//!         codec.decode(&bits, &RawValue::Bytes(vec![0b0000_0101])),
//!         Some("00000101".to_string())
//!     );
//!     assert_eq!(
//!         codec.encode(&bits, "00000101".into())?,
//!         ProcessedValue::Buffer { bytes: vec![5] }
//!     );
//!
//!     let point = GeometryNode::Point { coordinates: [1.0, 2.0] };
//!     assert_eq!(
//!         codec.encode_column("point", point.into())?,
//!         ProcessedValue::Spatial { wkt: "POINT(1 2)".to_string() }
//!     );
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod decoder;
pub mod encoder;
pub mod errors;
pub mod prelude;
mod temporal;

// Re-export the main public types for convenience
pub use crate::core::ValueCodec;
pub use decoder::Decoder;
pub use encoder::{encode, encode_condition, normalize_date_time, Encoder};
pub use errors::ValuehausError;

// Re-export centralized config
pub use config::{CodecConfig, DisplayConfig, TemporalConfig};

// Re-export member crates
pub use byte_codec;
pub use geometry_codec;
pub use type_mapping;
