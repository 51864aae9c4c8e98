//! Share-string parser.
//!
//! Consumes [`Spanned`] tokens from the lexer and builds curves following
//! the grammar
//!
//! ```text
//! collection := curve ('!' curve)*
//! curve      := segment ('-' letter? segment)*
//! segment    := point '_' point '_' point '_' point
//! point      := coord '~' coord
//! ```

use bzc_core::{BzcError, Result};
use bzc_geometry::{Continuity, Segment};
use bzc_math::{dvec2, Point2};
use bzc_topology::Curve;

use crate::lexer::{Spanned, Token};

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    /// Byte length of the input, reported for errors at end of input.
    end: usize,
}

impl Parser {
    fn new(tokens: Vec<Spanned>, end: usize) -> Self {
        Self { tokens, pos: 0, end }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    fn offset(&self) -> usize {
        self.tokens.get(self.pos).map_or(self.end, |s| s.offset)
    }

    fn advance(&mut self) -> Result<Token> {
        let Some(spanned) = self.tokens.get(self.pos) else {
            return Err(BzcError::parse(self.end, "unexpected end of input"));
        };
        self.pos += 1;
        Ok(spanned.token)
    }

    fn expect(&mut self, expected: Token, what: &str) -> Result<()> {
        let offset = self.offset();
        match self.advance()? {
            tok if tok == expected => Ok(()),
            other => Err(BzcError::parse(
                offset,
                format!("expected {what}, got {other:?}"),
            )),
        }
    }

    /// Parse a whole collection; empty input yields no curves.
    fn parse_collection(&mut self) -> Result<Vec<Curve>> {
        let mut curves = Vec::new();
        if self.peek().is_none() {
            return Ok(curves);
        }

        curves.push(self.parse_curve()?);
        while let Some(Token::Bang) = self.peek() {
            self.advance()?;
            curves.push(self.parse_curve()?);
        }

        if self.peek().is_some() {
            let offset = self.offset();
            let tok = self.advance()?;
            return Err(BzcError::parse(
                offset,
                format!("expected '!' or end of input, got {tok:?}"),
            ));
        }
        Ok(curves)
    }

    /// Parse `segment ('-' letter? segment)*`.
    fn parse_curve(&mut self) -> Result<Curve> {
        let mut segments = vec![self.parse_segment()?];
        let mut continuity: Vec<Continuity> = Vec::new();

        while let Some(&Token::Junction(mode)) = self.peek() {
            self.advance()?;
            continuity.push(mode);
            segments.push(self.parse_segment()?);
        }

        Ok(Curve::new(segments, continuity))
    }

    /// Parse `p0_p1_p2_p3`.
    fn parse_segment(&mut self) -> Result<Segment> {
        let p0 = self.parse_point()?;
        self.expect(Token::Underscore, "'_' after p0")?;
        let p1 = self.parse_point()?;
        self.expect(Token::Underscore, "'_' after p1")?;
        let p2 = self.parse_point()?;
        self.expect(Token::Underscore, "'_' after p2")?;
        let p3 = self.parse_point()?;
        Ok(Segment::new(p0, p1, p2, p3))
    }

    /// Parse `x~y`.
    fn parse_point(&mut self) -> Result<Point2> {
        let x = self.parse_coord()?;
        self.expect(Token::Tilde, "'~' between coordinates")?;
        let y = self.parse_coord()?;
        Ok(dvec2(x, y))
    }

    fn parse_coord(&mut self) -> Result<f64> {
        let offset = self.offset();
        match self.advance()? {
            Token::Coord(v) => Ok(v),
            other => Err(BzcError::parse(
                offset,
                format!("expected coordinate, got {other:?}"),
            )),
        }
    }
}

/// Parse a share string into its curves.
pub fn parse_curves(input: &str) -> Result<Vec<Curve>> {
    let tokens = crate::lexer::tokenize(input)?;
    let mut parser = Parser::new(tokens, input.len());
    parser.parse_collection()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
