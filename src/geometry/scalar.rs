use std::str::FromStr;

use serde::Serialize;

use crate::datatypes::GeometryType;
use crate::dimension::Dimension;
use crate::error::WktError;
use crate::geometry::Coordinates;

/// A geometry with its own coordinates: anything but a geometry collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafGeometry {
    geom_type: GeometryType,
    layout: Dimension,
    coordinates: Coordinates,
}

impl LeafGeometry {
    pub(crate) fn new(
        geom_type: GeometryType,
        layout: Dimension,
        coordinates: Coordinates,
    ) -> Self {
        debug_assert_eq!(geom_type.coord_depth(), Some(coordinates.depth()));
        Self {
            geom_type,
            layout,
            coordinates,
        }
    }

    pub fn geom_type(&self) -> GeometryType {
        self.geom_type
    }

    pub fn layout(&self) -> Dimension {
        self.layout
    }

    /// The number of values in every coordinate of this geometry.
    pub fn dimension(&self) -> usize {
        self.layout.size()
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    pub fn into_coordinates(self) -> Coordinates {
        self.coordinates
    }
}

/// The result of parsing one WKT geometry.
///
/// Serializes to a `{"geomType", "layout", "coordinates"}` object for leaves and to a bare array
/// of members for geometry collections.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Geometry {
    Leaf(LeafGeometry),
    Collection(Vec<Geometry>),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Leaf(leaf) => leaf.geom_type(),
            Geometry::Collection(_) => GeometryType::GeometryCollection,
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafGeometry> {
        match self {
            Geometry::Leaf(leaf) => Some(leaf),
            Geometry::Collection(_) => None,
        }
    }

    pub fn as_collection(&self) -> Option<&[Geometry]> {
        match self {
            Geometry::Leaf(_) => None,
            Geometry::Collection(members) => Some(members),
        }
    }

    /// Whether the geometry was written with `EMPTY`.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Leaf(leaf) => leaf.coordinates().is_empty(),
            Geometry::Collection(members) => members.is_empty(),
        }
    }
}

impl From<LeafGeometry> for Geometry {
    fn from(value: LeafGeometry) -> Self {
        Geometry::Leaf(value)
    }
}

impl FromStr for Geometry {
    type Err = WktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::io::wkt::read_wkt(s)
    }
}
