//! Compact, URL-safe text form for curve collections.
//!
//! ```text
//! 0~0_50~100_150~100_200~0-t200~0_250~n100_350~n100_400~0!10~10_20~20_30~20_40~10
//! ```
//!
//! `!` separates curves, `-` plus a letter (`i`, `t`, `c`) separates the
//! segments of a curve and records the junction's continuity, `_` separates
//! the four points of a segment and `~` the coordinates of a point.
//! Coordinates carry one decimal at most and negative values use an `n`
//! prefix, since `-` is taken by junctions.

pub mod encoder;
pub mod lexer;
pub mod parser;

use bzc_core::Result;
use bzc_topology::{Curve, CurveCollection};

pub use encoder::{encode_curve, encode_curves, encode_segment, format_coord, round_coord};
pub use parser::parse_curves;

/// Encode every curve of the collection. The active index is not part of
/// the format.
pub fn encode(collection: &CurveCollection) -> Result<String> {
    let encoded = encode_curves(&collection.curves)?;
    log::debug!(
        "encoded {} curves into {} bytes",
        collection.len(),
        encoded.len()
    );
    Ok(encoded)
}

/// Decode a share string into a collection with no active curve.
pub fn decode(input: &str) -> Result<CurveCollection> {
    let curves: Vec<Curve> = parse_curves(input)?;
    log::debug!(
        "decoded {} curves ({} segments) from {} bytes",
        curves.len(),
        curves.iter().map(Curve::len).sum::<usize>(),
        input.len()
    );
    Ok(CurveCollection::from_curves(curves))
}
