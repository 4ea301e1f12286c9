//! Bit field conversions
//!
//! A `bit(n)` value arrives as a big-endian byte buffer. For display it is
//! read as one unsigned integer and written in binary, left padded to `n`
//! digits. Encoding goes the other way: the digit string is left padded to
//! a whole number of bytes and chunked.

use std::fmt;
use std::str::FromStr;

use crate::errors::ByteCodecError;

/// Widest `bit(n)` column the server accepts
pub const MAX_BIT_LENGTH: u32 = 64;

/// Display padding for a declared width, capped at [`MAX_BIT_LENGTH`]
pub fn padding_width(bit_length: u32) -> usize {
    bit_length.min(MAX_BIT_LENGTH) as usize
}

/// Declared width of a bit field, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitLength(u32);

impl BitLength {
    pub fn get(self) -> u32 {
        self.0
    }

    fn checked(value: u32) -> Result<Self, ByteCodecError> {
        if value == 0 {
            return Err(ByteCodecError::InvalidBitLength(value.to_string()));
        }
        Ok(Self(value))
    }
}

impl fmt::Display for BitLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for BitLength {
    type Error = ByteCodecError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::checked(value)
    }
}

impl TryFrom<i32> for BitLength {
    type Error = ByteCodecError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<i64> for BitLength {
    type Error = ByteCodecError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let value =
            u32::try_from(value).map_err(|_| ByteCodecError::InvalidBitLength(value.to_string()))?;
        Self::checked(value)
    }
}

impl TryFrom<f64> for BitLength {
    type Error = ByteCodecError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > f64::from(u32::MAX)
        {
            return Err(ByteCodecError::InvalidBitLength(value.to_string()));
        }
        Self::checked(value as u32)
    }
}

impl FromStr for BitLength {
    type Err = ByteCodecError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed: u32 = value
            .trim()
            .parse()
            .map_err(|_| ByteCodecError::InvalidBitLength(value.to_string()))?;
        Self::checked(parsed)
    }
}

/// Render a big-endian buffer as binary digits padded to `bit_length`.
///
/// An empty buffer renders as an empty string. Values wider than
/// `bit_length` are never truncated, and padding stops at [`MAX_BIT_LENGTH`].
pub fn bytes_to_padded_bit_string(bytes: &[u8], bit_length: u32) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    let digits: String = bytes.iter().map(|byte| format!("{:08b}", byte)).collect();
    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() { "0" } else { significant };

    format!("{:0>width$}", significant, width = padding_width(bit_length))
}

/// Pack a binary digit string into big-endian bytes.
///
/// The bit length must be a positive integer and the value must fit in it.
/// The digit string is left padded to a multiple of eight before chunking.
pub fn bit_string_to_bytes<L>(bits: &str, bit_length: L) -> Result<Vec<u8>, ByteCodecError>
where
    L: TryInto<BitLength>,
    ByteCodecError: From<L::Error>,
{
    let bit_length: BitLength = bit_length.try_into()?;

    if !bits.chars().all(|c| c == '0' || c == '1') {
        return Err(ByteCodecError::InvalidBitString(bits.to_string()));
    }

    let significant = bits.trim_start_matches('0').len();
    if significant > bit_length.get() as usize {
        return Err(ByteCodecError::BitStringTooLong {
            bits: significant,
            bit_length: bit_length.get(),
        });
    }

    let padded_len = bits.len().div_ceil(8) * 8;
    let padded = format!("{:0>width$}", bits, width = padded_len);

    Ok(padded
        .as_bytes()
        .chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u8, |byte, digit| (byte << 1) | (digit - b'0'))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte_is_padded_to_declared_length() {
        assert_eq!(bytes_to_padded_bit_string(&[0b0000_0101], 8), "00000101");
        assert_eq!(bytes_to_padded_bit_string(&[0b0000_0101], 3), "101");
    }

    #[test]
    fn test_multi_byte_is_big_endian() {
        assert_eq!(bytes_to_padded_bit_string(&[0x01, 0x00], 10), "0100000000");
        assert_eq!(bytes_to_padded_bit_string(&[0x00, 0x03], 16), "0000000000000011");
    }

    #[test]
    fn test_zero_and_empty_buffers() {
        assert_eq!(bytes_to_padded_bit_string(&[0, 0], 4), "0000");
        assert_eq!(bytes_to_padded_bit_string(&[0], 0), "0");
        assert_eq!(bytes_to_padded_bit_string(&[], 8), "");
    }

    #[test]
    fn test_padding_stops_at_widest_column() {
        assert_eq!(bytes_to_padded_bit_string(&[1], 4_000_000_000).len(), 64);
        assert_eq!(bytes_to_padded_bit_string(&[1], 64).len(), 64);
        assert_eq!(padding_width(12), 12);
    }

    #[test]
    fn test_wider_value_is_not_truncated() {
        assert_eq!(bytes_to_padded_bit_string(&[0xff], 4), "11111111");
    }

    #[test]
    fn test_bit_string_to_bytes() {
        assert_eq!(bit_string_to_bytes("00000101", 8).unwrap(), vec![5]);
        assert_eq!(bit_string_to_bytes("101", 8).unwrap(), vec![5]);
        assert_eq!(
            bit_string_to_bytes("0000000100000011", 16).unwrap(),
            vec![1, 3]
        );
        assert_eq!(bit_string_to_bytes("1000000000", 10).unwrap(), vec![2, 0]);
    }

    #[test]
    fn test_leading_zeros_do_not_count_against_length() {
        assert_eq!(bit_string_to_bytes("00000101", 3).unwrap(), vec![5]);
    }

    #[test]
    fn test_invalid_bit_lengths() {
        assert!(matches!(
            bit_string_to_bytes("1", 0),
            Err(ByteCodecError::InvalidBitLength(_))
        ));
        assert!(matches!(
            bit_string_to_bytes("1", -3i64),
            Err(ByteCodecError::InvalidBitLength(_))
        ));
        assert!(matches!(
            bit_string_to_bytes("1", 2.5),
            Err(ByteCodecError::InvalidBitLength(_))
        ));
        assert!(matches!(
            bit_string_to_bytes("1", f64::NAN),
            Err(ByteCodecError::InvalidBitLength(_))
        ));
        assert!(matches!(
            "eight".parse::<BitLength>(),
            Err(ByteCodecError::InvalidBitLength(_))
        ));
        assert_eq!(BitLength::try_from(8.0).unwrap().get(), 8);
    }

    #[test]
    fn test_accepts_validated_length() {
        let length: BitLength = "8".parse().unwrap();
        assert_eq!(bit_string_to_bytes("11", length).unwrap(), vec![3]);
    }

    #[test]
    fn test_rejects_bad_digits_and_overflow() {
        assert_eq!(
            bit_string_to_bytes("10201", 8).unwrap_err(),
            ByteCodecError::InvalidBitString("10201".to_string())
        );
        assert_eq!(
            bit_string_to_bytes("111", 2).unwrap_err(),
            ByteCodecError::BitStringTooLong {
                bits: 3,
                bit_length: 2
            }
        );
    }

    #[test]
    fn test_decoded_digits_encode_back() {
        let bytes = vec![0x02, 0xa5];
        let digits = bytes_to_padded_bit_string(&bytes, 10);
        assert_eq!(digits, "1010100101");
        assert_eq!(bit_string_to_bytes(&digits, 10).unwrap(), bytes);
    }
}
