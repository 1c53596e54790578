use serde::Serialize;

/// A single coordinate: `x y [z] [m]`, as many values as the layout has dimensions.
pub type Coord = Vec<f64>;

/// Nested coordinate arrays of a single geometry.
///
/// The variant is fixed by the geometry type. `LINESTRING` and `MULTIPOINT` share the
/// [Coordinates::LineString] shape, `POLYGON` and `MULTILINESTRING` share [Coordinates::Polygon].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coordinates {
    /// `None` for `POINT EMPTY`.
    Point(Option<Coord>),
    LineString(Vec<Coord>),
    Polygon(Vec<Vec<Coord>>),
    MultiPolygon(Vec<Vec<Vec<Coord>>>),
}

impl Coordinates {
    /// Number of array levels before reaching raw numbers.
    pub fn depth(&self) -> usize {
        match self {
            Coordinates::Point(_) => 1,
            Coordinates::LineString(_) => 2,
            Coordinates::Polygon(_) => 3,
            Coordinates::MultiPolygon(_) => 4,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Coordinates::Point(coord) => coord.is_none(),
            Coordinates::LineString(coords) => coords.is_empty(),
            Coordinates::Polygon(rings) => rings.is_empty(),
            Coordinates::MultiPolygon(polygons) => polygons.is_empty(),
        }
    }

    /// Iterate over every coordinate at the deepest level, in input order.
    pub fn coords(&self) -> Box<dyn Iterator<Item = &Coord> + '_> {
        match self {
            Coordinates::Point(coord) => Box::new(coord.iter()),
            Coordinates::LineString(coords) => Box::new(coords.iter()),
            Coordinates::Polygon(rings) => Box::new(rings.iter().flatten()),
            Coordinates::MultiPolygon(polygons) => {
                Box::new(polygons.iter().flatten().flatten())
            }
        }
    }
}
