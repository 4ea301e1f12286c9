//! WKT rendering
//!
//! Structure to text only. Output follows the `TYPE(coordinates)` layout
//! that the server's geometry constructors accept.

use std::fmt::{self, Write};

use crate::errors::GeometryError;
use crate::node::{GeometryNode, Position};

/// Type keywords accepted at the start of user-typed WKT
const WKT_KEYWORDS: &[&str] = &[
    "POINT",
    "LINESTRING",
    "POLYGON",
    "MULTIPOINT",
    "MULTILINESTRING",
    "MULTIPOLYGON",
    "GEOMETRYCOLLECTION",
    "GEOMCOLLECTION",
];

/// Render a geometry as WKT text
pub fn to_wkt(node: &GeometryNode) -> String {
    node.to_string()
}

impl GeometryNode {
    /// WKT type keyword for this node
    pub fn wkt_keyword(&self) -> &'static str {
        match self {
            GeometryNode::Point { .. } => "POINT",
            GeometryNode::LineString { .. } => "LINESTRING",
            GeometryNode::Polygon { .. } => "POLYGON",
            GeometryNode::MultiPoint { .. } => "MULTIPOINT",
            GeometryNode::MultiLineString { .. } => "MULTILINESTRING",
            GeometryNode::MultiPolygon { .. } => "MULTIPOLYGON",
            GeometryNode::GeometryCollection { .. } => "GEOMETRYCOLLECTION",
        }
    }

    pub fn to_wkt(&self) -> String {
        to_wkt(self)
    }
}

impl fmt::Display for GeometryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wkt_keyword())?;
        f.write_char('(')?;
        match self {
            GeometryNode::Point { coordinates } => write_position(f, coordinates)?,
            GeometryNode::LineString { coordinates } | GeometryNode::MultiPoint { coordinates } => {
                write_positions(f, coordinates)?
            }
            GeometryNode::Polygon { coordinates }
            | GeometryNode::MultiLineString { coordinates } => write_parts(f, coordinates)?,
            GeometryNode::MultiPolygon { coordinates } => {
                for (index, polygon) in coordinates.iter().enumerate() {
                    if index > 0 {
                        f.write_char(',')?;
                    }
                    f.write_char('(')?;
                    write_parts(f, polygon)?;
                    f.write_char(')')?;
                }
            }
            GeometryNode::GeometryCollection { geometries } => {
                for (index, child) in geometries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(child, f)?;
                }
            }
        }
        f.write_char(')')
    }
}

fn write_position(f: &mut fmt::Formatter<'_>, [x, y]: &Position) -> fmt::Result {
    write!(f, "{} {}", x, y)
}

fn write_positions(f: &mut fmt::Formatter<'_>, positions: &[Position]) -> fmt::Result {
    for (index, position) in positions.iter().enumerate() {
        if index > 0 {
            f.write_char(',')?;
        }
        write_position(f, position)?;
    }
    Ok(())
}

/// Parenthesized, comma-joined rings or line parts
fn write_parts(f: &mut fmt::Formatter<'_>, parts: &[Vec<Position>]) -> fmt::Result {
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            f.write_char(',')?;
        }
        f.write_char('(')?;
        write_positions(f, part)?;
        f.write_char(')')?;
    }
    Ok(())
}

/// Boundary check for user-typed WKT.
///
/// Verifies the leading type keyword and that the coordinate body is a
/// single balanced parenthesized group. The body itself is left to the
/// server's geometry constructor.
pub fn check_wkt(text: &str) -> Result<(), GeometryError> {
    let text = text.trim();
    let keyword_end = text
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(text.len());
    let keyword = text[..keyword_end].to_ascii_uppercase();
    if !WKT_KEYWORDS.contains(&keyword.as_str()) {
        return Err(GeometryError::UnknownSpatialType(keyword));
    }

    let body = text[keyword_end..].trim_start();
    if !body.starts_with('(') || !body.ends_with(')') {
        return Err(GeometryError::MalformedWkt(format!(
            "{} must be followed by a parenthesized body",
            keyword
        )));
    }

    let mut depth = 0i64;
    for (index, ch) in body.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 || (depth == 0 && index + 1 != body.len()) {
                    return Err(GeometryError::MalformedWkt(
                        "unbalanced parentheses".to_string(),
                    ));
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(GeometryError::MalformedWkt(
            "unbalanced parentheses".to_string(),
        ));
    }

    Ok(())
}
