//! Geometry codec for spatial column values
//!
//! Converts GeoJSON-like structures into WKT text for the spatial column
//! types. Only structure to text conversion is provided; user-typed WKT is
//! boundary checked but never parsed.

pub mod errors;
pub mod node;
pub mod wkt;

pub use errors::GeometryError;
pub use node::{GeometryNode, Position};
pub use wkt::{check_wkt, to_wkt};
