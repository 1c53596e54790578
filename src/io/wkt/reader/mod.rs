//! Read a single WKT geometry into a [Geometry] tree.

pub use lexer::Lexer;
pub use parser::Parser;
pub use token::{Token, TokenType, TokenValue};

use crate::error::Result;
use crate::geometry::Geometry;

mod lexer;
mod parser;
mod token;

/// Options for the WKT reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WktReaderOptions {
    /// Fail when anything but whitespace follows the top-level geometry.
    ///
    /// When `false`, trailing tokens are left unread.
    pub require_end_of_input: bool,

    /// The maximum number of nested `GEOMETRYCOLLECTION`s.
    pub max_nesting_depth: usize,
}

impl WktReaderOptions {
    pub fn new(require_end_of_input: bool, max_nesting_depth: usize) -> Self {
        Self {
            require_end_of_input,
            max_nesting_depth,
        }
    }
}

impl Default for WktReaderOptions {
    fn default() -> Self {
        Self::new(false, 32)
    }
}

/// Parse a WKT string with the default [WktReaderOptions].
///
/// ```
/// use geoarrow_wkt::io::wkt::read_wkt;
///
/// let geom = read_wkt("POINT Z (1 2 3)").unwrap();
/// let leaf = geom.as_leaf().unwrap();
/// assert_eq!(leaf.dimension(), 3);
/// ```
pub fn read_wkt(wkt: &str) -> Result<Geometry> {
    read_wkt_with_options(wkt, &WktReaderOptions::default())
}

/// Parse a WKT string.
pub fn read_wkt_with_options(wkt: &str, options: &WktReaderOptions) -> Result<Geometry> {
    Parser::with_options(Lexer::new(wkt), *options).parse()
}
