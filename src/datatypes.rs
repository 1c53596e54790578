use std::fmt::Display;

use phf::phf_map;
use serde::Serialize;

/// The geometry keywords recognized at the start of a WKT geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GeometryType {
    #[serde(rename = "POINT")]
    Point,
    #[serde(rename = "LINESTRING")]
    LineString,
    #[serde(rename = "POLYGON")]
    Polygon,
    #[serde(rename = "MULTIPOINT")]
    MultiPoint,
    #[serde(rename = "MULTILINESTRING")]
    MultiLineString,
    #[serde(rename = "MULTIPOLYGON")]
    MultiPolygon,
    #[serde(rename = "GEOMETRYCOLLECTION")]
    GeometryCollection,
}

static KEYWORDS: phf::Map<&'static str, GeometryType> = phf_map! {
    "POINT" => GeometryType::Point,
    "LINESTRING" => GeometryType::LineString,
    "POLYGON" => GeometryType::Polygon,
    "MULTIPOINT" => GeometryType::MultiPoint,
    "MULTILINESTRING" => GeometryType::MultiLineString,
    "MULTIPOLYGON" => GeometryType::MultiPolygon,
    "GEOMETRYCOLLECTION" => GeometryType::GeometryCollection,
};

impl GeometryType {
    /// Look up an upper-cased WKT keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        KEYWORDS.get(keyword).copied()
    }

    /// The upper-case WKT keyword for this type.
    pub fn keyword(&self) -> &'static str {
        match self {
            GeometryType::Point => "POINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
            GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Number of array levels above the raw numbers in this type's coordinates.
    ///
    /// Geometry collections have no coordinates of their own and return `None`.
    pub fn coord_depth(&self) -> Option<usize> {
        match self {
            GeometryType::Point => Some(1),
            GeometryType::LineString | GeometryType::MultiPoint => Some(2),
            GeometryType::Polygon | GeometryType::MultiLineString => Some(3),
            GeometryType::MultiPolygon => Some(4),
            GeometryType::GeometryCollection => None,
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
