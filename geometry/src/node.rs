//! GeoJSON-like geometry structure
//!
//! `GeometryNode` mirrors the objects the driver hands back for spatial
//! columns: a `type` discriminant plus `coordinates` whose nesting depth is
//! fixed per shape, or `geometries` for collections.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::GeometryError;

/// A single `[x, y]` coordinate pair
pub type Position = [f64; 2];

/// Discriminant used by the driver for raw buffers
const BUFFER_DISCRIMINANT: &str = "Buffer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeometryNode {
    Point { coordinates: Position },
    LineString { coordinates: Vec<Position> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPoint { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    GeometryCollection { geometries: Vec<GeometryNode> },
}

impl GeometryNode {
    /// GeoJSON discriminant of this node
    pub fn kind(&self) -> &'static str {
        match self {
            GeometryNode::Point { .. } => "Point",
            GeometryNode::LineString { .. } => "LineString",
            GeometryNode::Polygon { .. } => "Polygon",
            GeometryNode::MultiPoint { .. } => "MultiPoint",
            GeometryNode::MultiLineString { .. } => "MultiLineString",
            GeometryNode::MultiPolygon { .. } => "MultiPolygon",
            GeometryNode::GeometryCollection { .. } => "GeometryCollection",
        }
    }

    /// Recognize an untyped GeoJSON-like object.
    ///
    /// The discriminant selects the shape, then the coordinate payload must
    /// have exactly the nesting depth that shape requires. Objects tagged as
    /// driver buffers are rejected with `NotAGeometry`.
    pub fn from_geojson(value: &Value) -> Result<Self, GeometryError> {
        let object = value.as_object().ok_or(GeometryError::NotAGeometry)?;
        let kind = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or(GeometryError::NotAGeometry)?;

        if kind == BUFFER_DISCRIMINANT {
            return Err(GeometryError::NotAGeometry);
        }

        let coordinates = || {
            object
                .get("coordinates")
                .ok_or_else(|| invalid(kind, "missing coordinates"))
        };

        match kind {
            "Point" => Ok(GeometryNode::Point {
                coordinates: position(kind, coordinates()?)?,
            }),
            "LineString" => Ok(GeometryNode::LineString {
                coordinates: positions(kind, coordinates()?)?,
            }),
            "Polygon" => Ok(GeometryNode::Polygon {
                coordinates: rings(kind, coordinates()?)?,
            }),
            "MultiPoint" => Ok(GeometryNode::MultiPoint {
                coordinates: positions(kind, coordinates()?)?,
            }),
            "MultiLineString" => Ok(GeometryNode::MultiLineString {
                coordinates: rings(kind, coordinates()?)?,
            }),
            "MultiPolygon" => Ok(GeometryNode::MultiPolygon {
                coordinates: array(kind, coordinates()?)?
                    .iter()
                    .map(|polygon| rings(kind, polygon))
                    .collect::<Result<_, _>>()?,
            }),
            "GeometryCollection" => {
                let children = object
                    .get("geometries")
                    .ok_or_else(|| invalid(kind, "missing geometries"))?;
                Ok(GeometryNode::GeometryCollection {
                    geometries: array(kind, children)?
                        .iter()
                        .map(GeometryNode::from_geojson)
                        .collect::<Result<_, _>>()?,
                })
            }
            other => Err(GeometryError::UnknownSpatialType(other.to_string())),
        }
    }
}

fn invalid(shape: &str, reason: &str) -> GeometryError {
    GeometryError::InvalidCoordinates {
        shape: shape.to_string(),
        reason: reason.to_string(),
    }
}

fn array<'a>(shape: &str, value: &'a Value) -> Result<&'a Vec<Value>, GeometryError> {
    value
        .as_array()
        .ok_or_else(|| invalid(shape, "expected an array"))
}

fn position(shape: &str, value: &Value) -> Result<Position, GeometryError> {
    match array(shape, value)?.as_slice() {
        [x, y] => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => Ok([x, y]),
            _ => Err(invalid(shape, "coordinates must be numbers")),
        },
        _ => Err(invalid(shape, "expected a coordinate pair")),
    }
}

fn positions(shape: &str, value: &Value) -> Result<Vec<Position>, GeometryError> {
    array(shape, value)?
        .iter()
        .map(|pair| position(shape, pair))
        .collect()
}

fn rings(shape: &str, value: &Value) -> Result<Vec<Vec<Position>>, GeometryError> {
    array(shape, value)?
        .iter()
        .map(|ring| positions(shape, ring))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_point_is_recognized() {
        let node = GeometryNode::from_geojson(&json!({"type": "Point", "coordinates": [1, 2]}))
            .unwrap();
        assert_eq!(node, GeometryNode::Point { coordinates: [1.0, 2.0] });
        assert_eq!(node.kind(), "Point");
    }

    #[test]
    fn test_nested_collection_is_recognized() {
        let value = json!({
            "type": "GeometryCollection",
            "geometries": [
                {"type": "Point", "coordinates": [0, 0]},
                {"type": "MultiPolygon", "coordinates": [[[[0, 0], [1, 0], [1, 1], [0, 0]]]]}
            ]
        });
        let node = GeometryNode::from_geojson(&value).unwrap();
        let GeometryNode::GeometryCollection { geometries } = node else {
            panic!("expected a collection");
        };
        assert_eq!(geometries.len(), 2);
        assert_eq!(geometries[1].kind(), "MultiPolygon");
    }

    #[test]
    fn test_depth_mismatch_is_rejected() {
        let err = GeometryNode::from_geojson(&json!({"type": "Polygon", "coordinates": [[1, 2]]}))
            .unwrap_err();
        assert!(matches!(err, GeometryError::InvalidCoordinates { shape, .. } if shape == "Polygon"));

        let err = GeometryNode::from_geojson(&json!({"type": "Point", "coordinates": [[1, 2]]}))
            .unwrap_err();
        assert!(matches!(err, GeometryError::InvalidCoordinates { .. }));
    }

    #[test]
    fn test_unknown_discriminant() {
        let err = GeometryNode::from_geojson(&json!({"type": "Circle", "coordinates": [0, 0]}))
            .unwrap_err();
        assert_eq!(err, GeometryError::UnknownSpatialType("Circle".to_string()));
    }

    #[test]
    fn test_buffer_shape_is_not_a_geometry() {
        let err = GeometryNode::from_geojson(&json!({"type": "Buffer", "data": [1, 2, 3]}))
            .unwrap_err();
        assert_eq!(err, GeometryError::NotAGeometry);
        assert_eq!(
            GeometryNode::from_geojson(&json!("POINT(1 2)")).unwrap_err(),
            GeometryError::NotAGeometry
        );
    }

    #[test]
    fn test_serde_matches_geojson() {
        let node = GeometryNode::LineString {
            coordinates: vec![[1.0, 2.0], [3.0, 4.0]],
        };
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({"type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.0]]})
        );
        assert_eq!(GeometryNode::from_geojson(&value).unwrap(), node);
    }
}
