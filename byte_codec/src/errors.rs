//! Error types for byte and bit conversions

use std::convert::Infallible;
use thiserror::Error;

/// Byte/bit codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ByteCodecError {
    #[error("Invalid bit length: {0} (expected a positive integer)")]
    InvalidBitLength(String),

    #[error("Invalid bit string '{0}': only '0' and '1' are allowed")]
    InvalidBitString(String),

    #[error("Bit string needs {bits} bits but the column holds {bit_length}")]
    BitStringTooLong { bits: usize, bit_length: u32 },
}

impl From<Infallible> for ByteCodecError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
