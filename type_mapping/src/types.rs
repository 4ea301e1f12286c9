//! Value model definitions
//!
//! This module provides the value shapes exchanged with the query
//! execution layer (`RawValue`), the editing surface (`UserInput`) and
//! the query builder (`ProcessedValue`).

use geometry_codec::GeometryNode;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Column value as received from query execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    Null,
    Text(String),
    Number(Number),
    Bytes(Vec<u8>),
    Geometry(GeometryNode),
    /// Structured document, either a JSON column or an untyped object
    Json(serde_json::Value),
}

impl RawValue {
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }
}

/// Value entered by a user for an edit or a query condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UserInput {
    Absent,
    Text(String),
    Number(Number),
    /// Selected members of a `set` column
    Selection(Vec<String>),
    Bytes(Vec<u8>),
    Geometry(GeometryNode),
}

impl UserInput {
    /// Inputs that encode to SQL NULL regardless of the column category
    pub fn is_falsy(&self) -> bool {
        match self {
            UserInput::Absent => true,
            UserInput::Text(text) => text.is_empty(),
            UserInput::Selection(members) => members.is_empty(),
            UserInput::Number(_) | UserInput::Bytes(_) | UserInput::Geometry(_) => false,
        }
    }

    /// Short name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            UserInput::Absent => "absent",
            UserInput::Text(_) => "text",
            UserInput::Number(_) => "number",
            UserInput::Selection(_) => "selection",
            UserInput::Bytes(_) => "bytes",
            UserInput::Geometry(_) => "geometry",
        }
    }
}

/// Scalar bound directly as a statement parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlainValue {
    Null,
    Text(String),
    Number(Number),
}

/// Wire-ready value handed to the query builder
///
/// `Buffer` binds as a binary parameter, `Spatial` must be wrapped in a
/// geometry constructor by the caller, `Json` binds as a JSON parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProcessedValue {
    Plain { value: PlainValue },
    Json { text: String },
    Buffer { bytes: Vec<u8> },
    Spatial { wkt: String },
}

impl ProcessedValue {
    pub fn null() -> Self {
        ProcessedValue::Plain {
            value: PlainValue::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(
            self,
            ProcessedValue::Plain {
                value: PlainValue::Null
            }
        )
    }
}

impl From<String> for RawValue {
    fn from(val: String) -> Self {
        RawValue::Text(val)
    }
}

impl From<&str> for RawValue {
    fn from(val: &str) -> Self {
        RawValue::Text(val.to_string())
    }
}

impl From<i64> for RawValue {
    fn from(val: i64) -> Self {
        RawValue::Number(val.into())
    }
}

impl From<Vec<u8>> for RawValue {
    fn from(val: Vec<u8>) -> Self {
        RawValue::Bytes(val)
    }
}

impl From<GeometryNode> for RawValue {
    fn from(val: GeometryNode) -> Self {
        RawValue::Geometry(val)
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(val: serde_json::Value) -> Self {
        RawValue::Json(val)
    }
}

impl From<PlainValue> for RawValue {
    fn from(val: PlainValue) -> Self {
        match val {
            PlainValue::Null => RawValue::Null,
            PlainValue::Text(text) => RawValue::Text(text),
            PlainValue::Number(number) => RawValue::Number(number),
        }
    }
}

impl<T> From<Option<T>> for RawValue
where
    T: Into<RawValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => RawValue::Null,
        }
    }
}

impl From<String> for UserInput {
    fn from(val: String) -> Self {
        UserInput::Text(val)
    }
}

impl From<&str> for UserInput {
    fn from(val: &str) -> Self {
        UserInput::Text(val.to_string())
    }
}

impl From<i64> for UserInput {
    fn from(val: i64) -> Self {
        UserInput::Number(val.into())
    }
}

impl From<Vec<u8>> for UserInput {
    fn from(val: Vec<u8>) -> Self {
        UserInput::Bytes(val)
    }
}

impl From<Vec<String>> for UserInput {
    fn from(val: Vec<String>) -> Self {
        UserInput::Selection(val)
    }
}

impl From<GeometryNode> for UserInput {
    fn from(val: GeometryNode) -> Self {
        UserInput::Geometry(val)
    }
}

impl<T> From<Option<T>> for UserInput
where
    T: Into<UserInput>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => UserInput::Absent,
        }
    }
}
