use tracing::{debug, trace};

use crate::datatypes::GeometryType;
use crate::dimension::Dimension;
use crate::error::{Result, WktError};
use crate::geometry::{Coord, Coordinates, Geometry, LeafGeometry};
use crate::io::wkt::reader::lexer::Lexer;
use crate::io::wkt::reader::token::{Token, TokenType, TokenValue};
use crate::io::wkt::reader::WktReaderOptions;

const EMPTY: &str = "EMPTY";

/// Recursive descent parser over the tokens of a [Lexer].
///
/// Holds exactly one token of lookahead. Any mismatch aborts the whole parse.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    token: Token,
    layout: Dimension,
    depth: usize,
    options: WktReaderOptions,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self::with_options(lexer, WktReaderOptions::default())
    }

    pub fn with_options(lexer: Lexer<'a>, options: WktReaderOptions) -> Self {
        Self {
            lexer,
            token: Token::new(0, TokenValue::EndOfInput),
            layout: Dimension::XY,
            depth: 0,
            options,
        }
    }

    /// Parse the geometry at the start of the input.
    pub fn parse(mut self) -> Result<Geometry> {
        debug!(wkt = self.lexer.wkt(), "parsing WKT");
        let result = self.parse_top_level();
        match &result {
            Ok(geometry) => debug!(geometry_type = %geometry.geometry_type(), "parsed WKT"),
            Err(err) => debug!(error = %err, "failed to parse WKT"),
        }
        result
    }

    fn parse_top_level(&mut self) -> Result<Geometry> {
        self.consume()?;
        let geometry = self.parse_geometry()?;
        if self.options.require_end_of_input && !self.is_token_type(TokenType::EndOfInput) {
            return Err(self.unexpected());
        }
        Ok(geometry)
    }

    /// Replace the lookahead token with the next one from the lexer.
    fn consume(&mut self) -> Result<()> {
        self.token = self.lexer.next_token()?;
        Ok(())
    }

    fn is_token_type(&self, token_type: TokenType) -> bool {
        self.token.token_type() == token_type
    }

    /// Consume the lookahead token if it has the given type.
    fn match_token(&mut self, token_type: TokenType) -> Result<bool> {
        let is_match = self.is_token_type(token_type);
        if is_match {
            self.consume()?;
        }
        Ok(is_match)
    }

    /// Consume an `EMPTY` keyword if it is next.
    fn match_empty(&mut self) -> Result<bool> {
        let is_empty = self.token.is_text(EMPTY);
        if is_empty {
            self.consume()?;
        }
        Ok(is_empty)
    }

    fn unexpected(&self) -> WktError {
        WktError::Syntax {
            value: self.token.to_string(),
            position: self.token.position,
            wkt: self.lexer.wkt().to_string(),
        }
    }

    fn parse_layout(&mut self) -> Result<Dimension> {
        let layout = match &self.token.value {
            TokenValue::Text(text) => Dimension::from_suffix(text),
            _ => None,
        };
        match layout {
            Some(layout) => {
                self.consume()?;
                Ok(layout)
            }
            None => Ok(Dimension::XY),
        }
    }

    fn parse_geometry(&mut self) -> Result<Geometry> {
        let position = self.token.position;
        let keyword = match &self.token.value {
            TokenValue::Text(text) => text.clone(),
            _ => return Err(self.unexpected()),
        };
        let geom_type = GeometryType::from_keyword(&keyword)
            .ok_or(WktError::InvalidGeometryType(keyword))?;
        self.consume()?;

        let layout = self.parse_layout()?;
        self.layout = layout;
        trace!(%geom_type, %layout, position, "parsing geometry");

        let coordinates = match geom_type {
            GeometryType::GeometryCollection => {
                return self.parse_geometry_collection_text(position);
            }
            GeometryType::Point => Coordinates::Point(self.parse_point_text()?),
            GeometryType::LineString => Coordinates::LineString(self.parse_line_string_text()?),
            GeometryType::Polygon => Coordinates::Polygon(self.parse_polygon_text()?),
            GeometryType::MultiPoint => Coordinates::LineString(self.parse_multi_point_text()?),
            GeometryType::MultiLineString => {
                Coordinates::Polygon(self.parse_multi_line_string_text()?)
            }
            GeometryType::MultiPolygon => {
                Coordinates::MultiPolygon(self.parse_multi_polygon_text()?)
            }
        };
        Ok(LeafGeometry::new(geom_type, layout, coordinates).into())
    }

    /// `'(' body ')'`, or `EMPTY` yielding `empty`.
    fn parse_tagged_text<T>(
        &mut self,
        body: impl FnOnce(&mut Self) -> Result<T>,
        empty: impl FnOnce() -> T,
    ) -> Result<T> {
        if self.match_token(TokenType::LeftParen)? {
            let value = body(self)?;
            if self.match_token(TokenType::RightParen)? {
                return Ok(value);
            }
        } else if self.match_empty()? {
            return Ok(empty());
        }
        Err(self.unexpected())
    }

    /// `item (',' item)*`
    fn parse_list<T>(&mut self, item: impl Fn(&mut Self) -> Result<T>) -> Result<Vec<T>> {
        let mut items = vec![item(self)?];
        while self.match_token(TokenType::Comma)? {
            items.push(item(self)?);
        }
        Ok(items)
    }

    fn parse_geometry_collection_text(&mut self, position: usize) -> Result<Geometry> {
        if self.depth >= self.options.max_nesting_depth {
            return Err(WktError::NestingDepth {
                limit: self.options.max_nesting_depth,
                position,
            });
        }
        self.depth += 1;
        let members = self.parse_tagged_text(|p| p.parse_list(Self::parse_geometry), Vec::new)?;
        self.depth -= 1;
        Ok(Geometry::Collection(members))
    }

    fn parse_point_text(&mut self) -> Result<Option<Coord>> {
        self.parse_tagged_text(|p| p.parse_point().map(Some), || None)
    }

    fn parse_line_string_text(&mut self) -> Result<Vec<Coord>> {
        self.parse_tagged_text(Self::parse_point_list, Vec::new)
    }

    fn parse_polygon_text(&mut self) -> Result<Vec<Vec<Coord>>> {
        self.parse_tagged_text(Self::parse_line_string_text_list, Vec::new)
    }

    /// Accepts both `((x y), (x y))` and `(x y, x y)`, told apart by the token after `(`.
    fn parse_multi_point_text(&mut self) -> Result<Vec<Coord>> {
        self.parse_tagged_text(
            |p| {
                if p.is_token_type(TokenType::LeftParen) {
                    p.parse_point_text_list()
                } else {
                    p.parse_point_list()
                }
            },
            Vec::new,
        )
    }

    fn parse_multi_line_string_text(&mut self) -> Result<Vec<Vec<Coord>>> {
        self.parse_tagged_text(Self::parse_line_string_text_list, Vec::new)
    }

    fn parse_multi_polygon_text(&mut self) -> Result<Vec<Vec<Vec<Coord>>>> {
        self.parse_tagged_text(Self::parse_polygon_text_list, Vec::new)
    }

    /// Exactly as many numbers as the current layout has dimensions.
    fn parse_point(&mut self) -> Result<Coord> {
        let dimensions = self.layout.size();
        let mut coord = Vec::with_capacity(dimensions);
        while coord.len() < dimensions {
            match self.token.value {
                TokenValue::Number(value) => {
                    coord.push(value);
                    self.consume()?;
                }
                _ => return Err(self.unexpected()),
            }
        }
        Ok(coord)
    }

    fn parse_point_list(&mut self) -> Result<Vec<Coord>> {
        self.parse_list(Self::parse_point)
    }

    /// Parenthesized points of a multipoint. `EMPTY` members have no coordinate to hold and are
    /// rejected.
    fn parse_point_text_list(&mut self) -> Result<Vec<Coord>> {
        self.parse_list(|p| {
            if !p.match_token(TokenType::LeftParen)? {
                return Err(p.unexpected());
            }
            let coord = p.parse_point()?;
            if !p.match_token(TokenType::RightParen)? {
                return Err(p.unexpected());
            }
            Ok(coord)
        })
    }

    fn parse_line_string_text_list(&mut self) -> Result<Vec<Vec<Coord>>> {
        self.parse_list(Self::parse_line_string_text)
    }

    fn parse_polygon_text_list(&mut self) -> Result<Vec<Vec<Vec<Coord>>>> {
        self.parse_list(Self::parse_polygon_text)
    }
}
