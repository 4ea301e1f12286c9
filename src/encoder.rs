//! User input to processed value
//!
//! Encoding is strict: the result goes straight into a write or a query
//! condition, so input that cannot become a well-formed value is an error.

use byte_codec::{bit_string_to_bytes, restore_binary_padding, ByteCodecError};
use chrono::{FixedOffset, Offset, Utc};
use config::CodecConfig;
use geometry_codec::check_wkt;
use serde_json::Number;
use type_mapping::{Category, PlainValue, ProcessedValue, PureType, TypeDecl, UserInput};

use crate::errors::ValuehausError;
use crate::temporal::{self, Parsed};

/// Input encoder built from a `CodecConfig`
///
/// Zoned date-times are stored as wall-clock time in the configured display
/// offset, the same offset the [`Decoder`](crate::Decoder) renders them in.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    offset: FixedOffset,
}

impl Encoder {
    pub fn new(config: &CodecConfig) -> Result<Self, ValuehausError> {
        Ok(Self {
            offset: config.temporal.offset()?,
        })
    }

    /// Encode user input for a write.
    ///
    /// Falsy input (absent, empty text, empty selection) becomes SQL NULL for
    /// every category.
    pub fn encode(&self, decl: &TypeDecl, input: UserInput) -> Result<ProcessedValue, ValuehausError> {
        if input.is_falsy() {
            return Ok(ProcessedValue::null());
        }

        let category = decl.category();
        trace_log!("Encoding {} input for {}", input.kind(), decl.declaration());

        match category {
            Category::String | Category::Numeric | Category::EnumSet => encode_plain(decl, input),
            Category::Temporal => self.encode_temporal(decl.pure_type(), input),
            Category::Json => match input {
                UserInput::Text(text) => Ok(ProcessedValue::Json { text }),
                UserInput::Number(number) => Ok(ProcessedValue::Json {
                    text: number.to_string(),
                }),
                other => Err(mismatch(category, &other)),
            },
            Category::Bit => encode_bit(decl.length(), input),
            Category::BinaryString | Category::Blob => match input {
                UserInput::Text(text) => Ok(ProcessedValue::Buffer {
                    bytes: text.into_bytes(),
                }),
                UserInput::Bytes(bytes) => Ok(ProcessedValue::Buffer { bytes }),
                other => Err(mismatch(category, &other)),
            },
            Category::Geometry => match input {
                UserInput::Geometry(node) => Ok(ProcessedValue::Spatial { wkt: node.to_wkt() }),
                UserInput::Text(text) => {
                    check_wkt(&text)?;
                    Ok(ProcessedValue::Spatial {
                        wkt: text.trim().to_string(),
                    })
                }
                other => Err(mismatch(category, &other)),
            },
        }
    }

    /// Encode user input for a query condition.
    ///
    /// Same as [`Encoder::encode`], except fixed-width `binary(n)` values are
    /// padded with zero bytes to `n` so they compare equal to what the server
    /// stored.
    pub fn encode_condition(
        &self,
        decl: &TypeDecl,
        input: UserInput,
    ) -> Result<ProcessedValue, ValuehausError> {
        let value = self.encode(decl, input)?;
        match value {
            ProcessedValue::Buffer { bytes } if decl.pure_type() == PureType::Binary => {
                Ok(ProcessedValue::Buffer {
                    bytes: restore_binary_padding(&bytes, decl.length() as usize),
                })
            }
            other => Ok(other),
        }
    }

    /// Rewrite an ISO-8601 date-time as `YYYY-MM-DD HH:mm:ss`.
    ///
    /// Zoned input is converted into the configured offset, input without an
    /// offset is taken as already being in it. Fractional seconds are
    /// truncated, so encode and decode converge on the same text.
    pub fn normalize_date_time(&self, pure_type: PureType, text: &str) -> Result<String, ValuehausError> {
        temporal::parse_iso(text)
            .and_then(|parsed| self.wire_text(parsed))
            .ok_or_else(|| ValuehausError::InvalidTemporal {
                pure_type,
                value: text.to_string(),
            })
    }

    fn wire_text(&self, parsed: Parsed) -> Option<String> {
        let local = match parsed {
            Parsed::Zoned(_) => parsed.in_offset(self.offset)?.naive_local(),
            Parsed::Naive(value) => value,
        };
        Some(local.format(temporal::DATE_TIME_WIRE_FORMAT).to_string())
    }

    fn encode_temporal(
        &self,
        pure_type: PureType,
        input: UserInput,
    ) -> Result<ProcessedValue, ValuehausError> {
        let value = match input {
            UserInput::Text(text) if pure_type.is_date_time() => {
                PlainValue::Text(self.normalize_date_time(pure_type, &text)?)
            }
            UserInput::Text(text) => PlainValue::Text(text),
            UserInput::Number(number) if pure_type.is_date_time() => {
                let stored = number
                    .as_i64()
                    .and_then(temporal::from_epoch_millis)
                    .and_then(|parsed| self.wire_text(parsed))
                    .ok_or_else(|| ValuehausError::InvalidTemporal {
                        pure_type,
                        value: number.to_string(),
                    })?;
                PlainValue::Text(stored)
            }
            UserInput::Number(number) => PlainValue::Number(number),
            other => return Err(mismatch(Category::Temporal, &other)),
        };
        Ok(ProcessedValue::Plain { value })
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self { offset: Utc.fix() }
    }
}

/// Encode user input for a write with the default (UTC) configuration.
///
/// See [`Encoder::encode`].
pub fn encode(decl: &TypeDecl, input: UserInput) -> Result<ProcessedValue, ValuehausError> {
    Encoder::default().encode(decl, input)
}

/// Encode user input for a query condition with the default configuration.
///
/// See [`Encoder::encode_condition`].
pub fn encode_condition(
    decl: &TypeDecl,
    input: UserInput,
) -> Result<ProcessedValue, ValuehausError> {
    Encoder::default().encode_condition(decl, input)
}

/// Rewrite an ISO-8601 date-time as `YYYY-MM-DD HH:mm:ss` in UTC.
///
/// See [`Encoder::normalize_date_time`].
pub fn normalize_date_time(pure_type: PureType, text: &str) -> Result<String, ValuehausError> {
    Encoder::default().normalize_date_time(pure_type, text)
}

fn encode_plain(decl: &TypeDecl, input: UserInput) -> Result<ProcessedValue, ValuehausError> {
    let value = match input {
        UserInput::Text(text) => PlainValue::Text(text),
        UserInput::Number(number) => PlainValue::Number(number),
        UserInput::Selection(members) if decl.pure_type() == PureType::Set => {
            PlainValue::Text(members.join(","))
        }
        UserInput::Selection(mut members)
            if decl.pure_type() == PureType::Enum && members.len() == 1 =>
        {
            PlainValue::Text(members.remove(0))
        }
        other => return Err(mismatch(decl.category(), &other)),
    };
    Ok(ProcessedValue::Plain { value })
}

fn encode_bit(length: u32, input: UserInput) -> Result<ProcessedValue, ValuehausError> {
    let digits = match input {
        UserInput::Text(text) => {
            let digits = text.trim();
            if digits.is_empty() {
                return Err(ByteCodecError::InvalidBitString(text).into());
            }
            digits.to_string()
        }
        UserInput::Number(number) => integer_digits(&number)?,
        UserInput::Bytes(bytes) => return Ok(ProcessedValue::Buffer { bytes }),
        other => return Err(mismatch(Category::Bit, &other)),
    };

    // Declarations without a width fall back to the width of the input
    let length = if length == 0 {
        u32::try_from(digits.len()).unwrap_or(u32::MAX)
    } else {
        length
    };

    let bytes = bit_string_to_bytes(&digits, length)?;
    Ok(ProcessedValue::Buffer { bytes })
}

fn integer_digits(number: &Number) -> Result<String, ValuehausError> {
    number
        .as_u64()
        .map(|value| format!("{:b}", value))
        .ok_or_else(|| ByteCodecError::InvalidBitString(number.to_string()).into())
}

fn mismatch(category: Category, input: &UserInput) -> ValuehausError {
    ValuehausError::InputMismatch {
        category,
        input: input.kind(),
    }
}
