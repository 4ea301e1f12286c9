//! Raw value to display text
//!
//! Decoding never fails. Values that do not have the shape a category
//! expects render as the configured null text (or `None` for geometry) so a
//! single bad cell cannot break a whole result set.

use byte_codec::{binary_to_text, bytes_to_padded_bit_string, padding_width};
use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use config::CodecConfig;
use geometry_codec::GeometryNode;
use serde_json::Value;
use type_mapping::{Category, PureType, RawValue, TypeDecl};

use crate::errors::ValuehausError;
use crate::temporal::{self, Parsed};

/// Display renderer built from a `CodecConfig`
#[derive(Debug, Clone)]
pub struct Decoder {
    time_anchor: NaiveDate,
    offset: FixedOffset,
    blob_label: String,
    null_text: String,
}

impl Decoder {
    pub fn new(config: &CodecConfig) -> Result<Self, ValuehausError> {
        Ok(Self {
            time_anchor: config.temporal.time_anchor_date,
            offset: config.temporal.offset()?,
            blob_label: config.display.blob_label.clone(),
            null_text: config.display.null_text.clone(),
        })
    }

    /// Render a raw value for read-only display.
    ///
    /// Returns `None` only for geometry columns whose value is not a
    /// recognized shape.
    pub fn decode(&self, decl: &TypeDecl, raw: &RawValue) -> Option<String> {
        trace_log!("Decoding {:?} value for {}", decl.category(), decl.declaration());

        match decl.category() {
            Category::Geometry => decode_geometry(raw),
            _ if raw.is_null() => Some(self.null_text.clone()),
            Category::String | Category::Numeric | Category::EnumSet => Some(plain_text(raw)),
            Category::Temporal => Some(self.decode_temporal(decl.pure_type(), raw)),
            Category::Json => Some(decode_json(raw)),
            Category::Bit => Some(self.decode_bit(decl.length(), raw)),
            Category::BinaryString => Some(self.decode_binary(raw)),
            Category::Blob => Some(self.decode_blob(raw)),
        }
    }

    fn decode_temporal(&self, pure_type: PureType, raw: &RawValue) -> String {
        let text = match raw {
            RawValue::Text(text) => text.clone(),
            RawValue::Number(number) => {
                return self.decode_temporal_number(pure_type, number);
            }
            _ => {
                debug_log!("Temporal column received non-text value: {:?}", raw);
                return self.null_text.clone();
            }
        };

        let rendered = match pure_type {
            PureType::Time => temporal::parse_time_of_day(&text, self.time_anchor)
                .map(|value| value.format(temporal::TIME_DISPLAY_FORMAT).to_string()),
            PureType::Year => text
                .trim()
                .parse::<i64>()
                .ok()
                .map(|year| format!("{:04}", year))
                .or_else(|| self.format_parsed(pure_type, temporal::parse_iso(&text)?)),
            _ => temporal::parse_iso(&text).and_then(|parsed| self.format_parsed(pure_type, parsed)),
        };

        rendered.unwrap_or_else(|| {
            debug_log!("Unparseable {} value '{}', shown as is", pure_type, text);
            text
        })
    }

    fn decode_temporal_number(&self, pure_type: PureType, number: &serde_json::Number) -> String {
        match (pure_type, number.as_i64()) {
            (PureType::Year, Some(year)) => format!("{:04}", year),
            (PureType::Date | PureType::DateTime | PureType::Timestamp, Some(millis)) => {
                temporal::from_epoch_millis(millis)
                    .and_then(|parsed| self.format_parsed(pure_type, parsed))
                    .unwrap_or_else(|| number.to_string())
            }
            _ => number.to_string(),
        }
    }

    /// Apply the per-type display pattern
    fn format_parsed(&self, pure_type: PureType, parsed: Parsed) -> Option<String> {
        match pure_type {
            PureType::Year => Some(parsed.wall_clock().format("%Y").to_string()),
            PureType::Date => match parsed {
                Parsed::Naive(value) => Some(value.format(temporal::DATE_DISPLAY_FORMAT).to_string()),
                Parsed::Zoned(_) => parsed
                    .in_offset(self.offset)
                    .map(|value| value.format(temporal::DATE_DISPLAY_FORMAT).to_string()),
            },
            PureType::Time => Some(parsed.wall_clock().format(temporal::TIME_DISPLAY_FORMAT).to_string()),
            _ => parsed
                .in_offset(self.offset)
                .map(|value| value.format(temporal::DATE_TIME_DISPLAY_FORMAT).to_string()),
        }
    }

    fn decode_bit(&self, length: u32, raw: &RawValue) -> String {
        match raw {
            RawValue::Bytes(bytes) => bytes_to_padded_bit_string(bytes, length),
            RawValue::Number(number) => match number.as_u64() {
                Some(value) => format!("{:0>width$b}", value, width = padding_width(length)),
                None => {
                    debug_log!("Bit column received non-integer number {}", number);
                    self.null_text.clone()
                }
            },
            RawValue::Text(text) if !text.is_empty() && text.chars().all(|c| c == '0' || c == '1') => {
                format!("{:0>width$}", text, width = padding_width(length))
            }
            _ => {
                debug_log!("Bit column received unexpected value: {:?}", raw);
                self.null_text.clone()
            }
        }
    }

    fn decode_binary(&self, raw: &RawValue) -> String {
        match raw {
            RawValue::Bytes(bytes) => binary_to_text(bytes),
            RawValue::Text(text) => text.clone(),
            _ => {
                debug_log!("Binary column received unexpected value: {:?}", raw);
                self.null_text.clone()
            }
        }
    }

    fn decode_blob(&self, raw: &RawValue) -> String {
        let size = match raw {
            RawValue::Bytes(bytes) => Some(bytes.len()),
            RawValue::Text(text) => Some(text.len()),
            RawValue::Json(value) => buffer_length(value),
            _ => None,
        };
        match size {
            Some(size) => format!("{} {} bytes", self.blob_label, size),
            None => {
                debug_log!("Blob column received unexpected value: {:?}", raw);
                self.null_text.clone()
            }
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        let defaults = CodecConfig::default();
        Self {
            time_anchor: defaults.temporal.time_anchor_date,
            offset: Utc.fix(),
            blob_label: defaults.display.blob_label,
            null_text: defaults.display.null_text,
        }
    }
}

/// Pass-through rendering for string, numeric and enum/set columns
fn plain_text(raw: &RawValue) -> String {
    match raw {
        RawValue::Null => String::new(),
        RawValue::Text(text) => text.clone(),
        RawValue::Number(number) => number.to_string(),
        RawValue::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        RawValue::Geometry(node) => node.to_wkt(),
        RawValue::Json(Value::String(text)) => text.clone(),
        RawValue::Json(value) => value.to_string(),
    }
}

fn decode_json(raw: &RawValue) -> String {
    match raw {
        RawValue::Json(value) => value.to_string(),
        // Some drivers hand JSON columns back unparsed
        RawValue::Text(text) => match serde_json::from_str::<Value>(text) {
            Ok(value) => value.to_string(),
            Err(_) => text.clone(),
        },
        RawValue::Bytes(bytes) => decode_json(&RawValue::Text(
            String::from_utf8_lossy(bytes).into_owned(),
        )),
        RawValue::Number(number) => number.to_string(),
        RawValue::Geometry(node) => match serde_json::to_value(node) {
            Ok(value) => value.to_string(),
            Err(_err) => {
                debug_log!("Geometry in JSON column could not be serialized: {}", _err);
                node.to_wkt()
            }
        },
        RawValue::Null => String::new(),
    }
}

fn decode_geometry(raw: &RawValue) -> Option<String> {
    match raw {
        RawValue::Geometry(node) => Some(node.to_wkt()),
        RawValue::Json(value) => GeometryNode::from_geojson(value)
            .map(|node| node.to_wkt())
            .inspect_err(|_err| {
                debug_log!("Geometry column value not recognized: {}", _err);
            })
            .ok(),
        _ => None,
    }
}

/// Length of a `{"type": "Buffer", "data": [...]}` object
fn buffer_length(value: &Value) -> Option<usize> {
    let object = value.as_object()?;
    if object.get("type")?.as_str()? != "Buffer" {
        return None;
    }
    object.get("data")?.as_array().map(Vec::len)
}
