use crate::datatypes::GeometryType;

pub(crate) const POLYGON_WITH_HOLE: &str =
    "POLYGON ((35 10, 45 45, 15 40, 10 20, 35 10), (20 30, 35 35, 30 20, 20 30))";

/// Valid inputs for every leaf geometry type, in several layouts.
pub(crate) fn leaves() -> Vec<(&'static str, GeometryType)> {
    vec![
        ("POINT (1 2)", GeometryType::Point),
        ("POINT Z (1 2 3)", GeometryType::Point),
        ("POINT EMPTY", GeometryType::Point),
        ("LINESTRING (30 10, 10 30, 40 40)", GeometryType::LineString),
        ("LINESTRING M (1 2 3, 4 5 6)", GeometryType::LineString),
        ("LINESTRING EMPTY", GeometryType::LineString),
        (POLYGON_WITH_HOLE, GeometryType::Polygon),
        (
            "MULTIPOINT ((10 40), (40 30), (20 20), (30 10))",
            GeometryType::MultiPoint,
        ),
        ("MULTIPOINT Z (10 40 1, 40 30 2)", GeometryType::MultiPoint),
        (
            "MULTILINESTRING ((10 10, 20 20, 10 40), (40 40, 30 30, 40 20, 30 10))",
            GeometryType::MultiLineString,
        ),
        (
            "MULTIPOLYGON (((30 20, 45 40, 10 40, 30 20)), ((15 5, 40 10, 10 20, 5 10, 15 5)))",
            GeometryType::MultiPolygon,
        ),
        (
            "MULTIPOLYGON ZM (((0 0 0 0, 1 0 0 0, 1 1 0 0, 0 0 0 0)))",
            GeometryType::MultiPolygon,
        ),
    ]
}

/// Inputs whose tokens are all valid but do not follow the grammar.
pub(crate) fn invalid() -> Vec<&'static str> {
    vec![
        "",
        "(1 2)",
        "POINT 1 2)",
        "POINT ()",
        "POINT ZZ (1 2)",
        "LINESTRING (1 2,)",
        "LINESTRING (1 2 3 4)",
        "POLYGON (1 2, 3 4)",
        "MULTIPOINT (EMPTY)",
        "MULTIPOLYGON ((1 2))",
        "GEOMETRYCOLLECTION (POINT (1 2) POINT (3 4))",
    ]
}
