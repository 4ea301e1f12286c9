//! Byte and bit helpers for binary column types
//!
//! `bits` converts between byte buffers and the padded binary-digit strings
//! shown for `bit(n)` columns. `binary` handles the zero padding the server
//! applies to fixed-width `binary(n)` values.

pub mod binary;
pub mod bits;
pub mod errors;

pub use binary::{binary_to_text, restore_binary_padding, trim_binary_padding};
pub use bits::{
    bit_string_to_bytes, bytes_to_padded_bit_string, padding_width, BitLength, MAX_BIT_LENGTH,
};
pub use errors::ByteCodecError;
