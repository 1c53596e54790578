//! The structural geometry tree produced by the WKT reader.

pub use coord::{Coord, Coordinates};
pub use scalar::{Geometry, LeafGeometry};

mod coord;
mod scalar;
