//! SQL type tables
//!
//! This module holds the closed set of column type names the codec understands
//! and the static mapping from each of them to a semantic category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TypeMappingError;

/// Semantic grouping that drives decode/encode dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    String,
    Numeric,
    Temporal,
    EnumSet,
    Blob,
    Json,
    Bit,
    BinaryString,
    Geometry,
}

/// Canonical lower-case column type name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PureType {
    // Strings
    Char,
    Varchar,
    TinyText,
    Text,
    MediumText,
    LongText,
    // Numbers
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    Integer,
    BigInt,
    Decimal,
    Numeric,
    Float,
    Double,
    Real,
    Bool,
    Boolean,
    // Date and time
    Date,
    DateTime,
    Timestamp,
    Time,
    Year,
    // Enumerations
    Enum,
    Set,
    // Large objects
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    Json,
    Bit,
    // Fixed and variable width binary strings
    Binary,
    VarBinary,
    // Spatial
    Geometry,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    GeomCollection,
}

impl PureType {
    /// Every supported type, in declaration order
    pub const ALL: &'static [PureType] = &[
        PureType::Char,
        PureType::Varchar,
        PureType::TinyText,
        PureType::Text,
        PureType::MediumText,
        PureType::LongText,
        PureType::TinyInt,
        PureType::SmallInt,
        PureType::MediumInt,
        PureType::Int,
        PureType::Integer,
        PureType::BigInt,
        PureType::Decimal,
        PureType::Numeric,
        PureType::Float,
        PureType::Double,
        PureType::Real,
        PureType::Bool,
        PureType::Boolean,
        PureType::Date,
        PureType::DateTime,
        PureType::Timestamp,
        PureType::Time,
        PureType::Year,
        PureType::Enum,
        PureType::Set,
        PureType::TinyBlob,
        PureType::Blob,
        PureType::MediumBlob,
        PureType::LongBlob,
        PureType::Json,
        PureType::Bit,
        PureType::Binary,
        PureType::VarBinary,
        PureType::Geometry,
        PureType::Point,
        PureType::LineString,
        PureType::Polygon,
        PureType::MultiPoint,
        PureType::MultiLineString,
        PureType::MultiPolygon,
        PureType::GeometryCollection,
        PureType::GeomCollection,
    ];

    /// Category table lookup
    pub const fn category(self) -> Category {
        match self {
            PureType::Char
            | PureType::Varchar
            | PureType::TinyText
            | PureType::Text
            | PureType::MediumText
            | PureType::LongText => Category::String,
            PureType::TinyInt
            | PureType::SmallInt
            | PureType::MediumInt
            | PureType::Int
            | PureType::Integer
            | PureType::BigInt
            | PureType::Decimal
            | PureType::Numeric
            | PureType::Float
            | PureType::Double
            | PureType::Real
            | PureType::Bool
            | PureType::Boolean => Category::Numeric,
            PureType::Date
            | PureType::DateTime
            | PureType::Timestamp
            | PureType::Time
            | PureType::Year => Category::Temporal,
            PureType::Enum | PureType::Set => Category::EnumSet,
            PureType::TinyBlob | PureType::Blob | PureType::MediumBlob | PureType::LongBlob => {
                Category::Blob
            }
            PureType::Json => Category::Json,
            PureType::Bit => Category::Bit,
            PureType::Binary | PureType::VarBinary => Category::BinaryString,
            PureType::Geometry
            | PureType::Point
            | PureType::LineString
            | PureType::Polygon
            | PureType::MultiPoint
            | PureType::MultiLineString
            | PureType::MultiPolygon
            | PureType::GeometryCollection
            | PureType::GeomCollection => Category::Geometry,
        }
    }

    /// Canonical type name as it appears in a column declaration
    pub const fn as_str(self) -> &'static str {
        match self {
            PureType::Char => "char",
            PureType::Varchar => "varchar",
            PureType::TinyText => "tinytext",
            PureType::Text => "text",
            PureType::MediumText => "mediumtext",
            PureType::LongText => "longtext",
            PureType::TinyInt => "tinyint",
            PureType::SmallInt => "smallint",
            PureType::MediumInt => "mediumint",
            PureType::Int => "int",
            PureType::Integer => "integer",
            PureType::BigInt => "bigint",
            PureType::Decimal => "decimal",
            PureType::Numeric => "numeric",
            PureType::Float => "float",
            PureType::Double => "double",
            PureType::Real => "real",
            PureType::Bool => "bool",
            PureType::Boolean => "boolean",
            PureType::Date => "date",
            PureType::DateTime => "datetime",
            PureType::Timestamp => "timestamp",
            PureType::Time => "time",
            PureType::Year => "year",
            PureType::Enum => "enum",
            PureType::Set => "set",
            PureType::TinyBlob => "tinyblob",
            PureType::Blob => "blob",
            PureType::MediumBlob => "mediumblob",
            PureType::LongBlob => "longblob",
            PureType::Json => "json",
            PureType::Bit => "bit",
            PureType::Binary => "binary",
            PureType::VarBinary => "varbinary",
            PureType::Geometry => "geometry",
            PureType::Point => "point",
            PureType::LineString => "linestring",
            PureType::Polygon => "polygon",
            PureType::MultiPoint => "multipoint",
            PureType::MultiLineString => "multilinestring",
            PureType::MultiPolygon => "multipolygon",
            PureType::GeometryCollection => "geometrycollection",
            PureType::GeomCollection => "geomcollection",
        }
    }

    /// Timestamp-like types whose input is normalized on encode
    pub const fn is_date_time(self) -> bool {
        matches!(self, PureType::DateTime | PureType::Timestamp)
    }
}

impl fmt::Display for PureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PureType {
    type Err = TypeMappingError;

    /// Look up an already-normalized (trimmed, lower-case) type name
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        PureType::ALL
            .iter()
            .copied()
            .find(|pure_type| pure_type.as_str() == name)
            .ok_or_else(|| TypeMappingError::UnsupportedType(name.to_string()))
    }
}
