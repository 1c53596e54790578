//! A single-pass reader for [Well-Known Text](https://en.wikipedia.org/wiki/Well-known_text_representation_of_geometry)
//! geometries.
//!
//! Parsing produces a plain [Geometry] tree: a geometry type, a coordinate [Dimension] and nested
//! coordinate arrays, or an ordered collection of such trees for `GEOMETRYCOLLECTION`. Building
//! richer geometry objects from that tree is left to the caller.
//!
//! ```
//! use geoarrow_wkt::{parse_wkt, Coordinates, Dimension};
//!
//! let geom = parse_wkt("LINESTRING Z (1 2 3, 4 5 6)").unwrap();
//! let leaf = geom.as_leaf().unwrap();
//! assert_eq!(leaf.layout(), Dimension::XYZ);
//! assert_eq!(
//!     leaf.coordinates(),
//!     &Coordinates::LineString(vec![vec![1., 2., 3.], vec![4., 5., 6.]])
//! );
//! ```

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use datatypes::GeometryType;
pub use dimension::Dimension;
pub use error::{Result, WktError};
pub use geometry::{Coord, Coordinates, Geometry, LeafGeometry};
pub use io::wkt::{
    read_wkt as parse_wkt, read_wkt_with_options as parse_wkt_with_options, WktReaderOptions,
};

pub mod datatypes;
mod dimension;
pub mod error;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
