//! Error types for geometry conversion

use thiserror::Error;

/// Geometry codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Unknown spatial type: '{0}'")]
    UnknownSpatialType(String),

    #[error("Invalid coordinates for {shape}: {reason}")]
    InvalidCoordinates { shape: String, reason: String },

    #[error("Value is not a geometry object")]
    NotAGeometry,

    #[error("Malformed WKT: {0}")]
    MalformedWkt(String),
}
