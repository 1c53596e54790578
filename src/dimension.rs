use std::fmt::Display;

use serde::Serialize;

/// The coordinate layout of a geometry.
///
/// The layout decides how many numbers make up a single coordinate. It is read from the optional
/// `Z`, `M` or `ZM` suffix following the geometry keyword and defaults to [Dimension::XY].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Dimension {
    /// Two-dimensional.
    #[default]
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Maps an upper-cased layout suffix to its layout.
    ///
    /// Only the exact keywords `Z`, `M` and `ZM` are layout suffixes.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "Z" => Some(Dimension::XYZ),
            "M" => Some(Dimension::XYM),
            "ZM" => Some(Dimension::XYZM),
            _ => None,
        }
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}
