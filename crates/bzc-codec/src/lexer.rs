//! Share-string lexer / tokenizer.
//!
//! Converts the compact text form into a flat stream of [`Token`]s that the
//! parser consumes. Every token carries the byte offset it started at.

use bzc_core::{BzcError, Result};
use bzc_geometry::Continuity;

// ---------------------------------------------------------------------------
// Token types
// ---------------------------------------------------------------------------

/// A single lexical token of a share string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Coordinate, e.g. `12.5` or `n50` (= -50)
    Coord(f64),
    /// `~` between the x and y of a point
    Tilde,
    /// `_` between the four points of a segment
    Underscore,
    /// `-` plus its continuity letter, between two segments of a curve
    Junction(Continuity),
    /// `!` between two curves
    Bang,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub offset: usize,
}

/// Continuity for a junction letter, `None` for letters the format does not
/// define.
pub fn continuity_from_letter(letter: u8) -> Option<Continuity> {
    match letter {
        b'i' => Some(Continuity::Independent),
        b't' => Some(Continuity::C1),
        b'c' => Some(Continuity::C2),
        _ => None,
    }
}

pub fn continuity_letter(mode: Continuity) -> char {
    match mode {
        Continuity::Independent => 'i',
        Continuity::C1 => 't',
        Continuity::C2 => 'c',
    }
}

// ---------------------------------------------------------------------------
// Lexer
// ---------------------------------------------------------------------------

/// Tokenize a share string.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>> {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut pos: usize = 0;
    let mut tokens = Vec::new();

    while pos < len {
        let start = pos;
        let token = match bytes[pos] {
            b'~' => {
                pos += 1;
                Token::Tilde
            }
            b'_' => {
                pos += 1;
                Token::Underscore
            }
            b'!' => {
                pos += 1;
                Token::Bang
            }

            // Junction: '-' followed by an optional continuity letter.
            // 'n' after '-' starts a negative coordinate, not a letter.
            b'-' => {
                pos += 1;
                match bytes.get(pos) {
                    Some(&c) if c.is_ascii_lowercase() && c != b'n' => {
                        pos += 1;
                        let mode = continuity_from_letter(c).unwrap_or_else(|| {
                            log::warn!(
                                "unknown continuity letter '{}' at byte {}, using independent",
                                c as char,
                                pos - 1
                            );
                            Continuity::Independent
                        });
                        Token::Junction(mode)
                    }
                    _ => Token::Junction(Continuity::Independent),
                }
            }

            // Coordinate: ['n'] digits ['.' digits]
            c if c == b'n' || c.is_ascii_digit() => {
                let negative = c == b'n';
                if negative {
                    pos += 1;
                }
                let digits_start = pos;
                while pos < len && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
                if pos == digits_start {
                    return Err(BzcError::parse(pos, "expected digits in coordinate"));
                }
                if pos < len && bytes[pos] == b'.' {
                    pos += 1;
                    let frac_start = pos;
                    while pos < len && bytes[pos].is_ascii_digit() {
                        pos += 1;
                    }
                    if pos == frac_start {
                        return Err(BzcError::parse(pos, "expected digit after '.'"));
                    }
                }

                let text = &input[digits_start..pos];
                let value: f64 = text
                    .parse()
                    .map_err(|e| BzcError::parse(digits_start, format!("invalid coordinate '{text}': {e}")))?;
                if !value.is_finite() {
                    return Err(BzcError::parse(digits_start, "coordinate out of range"));
                }
                Token::Coord(if negative { -value } else { value })
            }

            _ => {
                let ch = input[pos..].chars().next().unwrap_or('\u{FFFD}');
                return Err(BzcError::parse(pos, format!("unexpected character '{ch}'")));
            }
        };
        tokens.push(Spanned { token, offset: start });
    }

    Ok(tokens)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
