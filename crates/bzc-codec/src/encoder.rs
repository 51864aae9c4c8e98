//! Share-string encoder.

use bzc_core::{BzcError, Result};
use bzc_geometry::Segment;
use bzc_math::Point2;
use bzc_topology::Curve;

use crate::lexer::continuity_letter;

/// Round to one decimal place, halves toward positive infinity.
pub fn round_coord(value: f64) -> f64 {
    let r = (value * 10.0 + 0.5).floor() / 10.0;
    // Collapse -0.0 so it prints without the negative prefix.
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Format one coordinate: one decimal at most, `n` instead of `-`, no
/// trailing `.0` on integral values.
pub fn format_coord(value: f64) -> Result<String> {
    // Checked after rounding: finite values near f64::MAX overflow when scaled.
    let r = round_coord(value);
    if !r.is_finite() {
        return Err(BzcError::Geometry(format!(
            "cannot encode coordinate {value}: out of range"
        )));
    }
    // f64 Display prints the shortest round-tripping decimal and never an
    // exponent, so 12.0 -> "12" and 12.3 -> "12.3".
    if r < 0.0 {
        Ok(format!("n{}", -r))
    } else {
        Ok(format!("{r}"))
    }
}

fn write_point(out: &mut String, p: Point2) -> Result<()> {
    out.push_str(&format_coord(p.x)?);
    out.push('~');
    out.push_str(&format_coord(p.y)?);
    Ok(())
}

/// `p0_p1_p2_p3`.
pub fn encode_segment(seg: &Segment) -> Result<String> {
    let mut out = String::new();
    for (i, p) in seg.to_array().into_iter().enumerate() {
        if i > 0 {
            out.push('_');
        }
        write_point(&mut out, p)?;
    }
    Ok(out)
}

/// Segments joined by `-` plus the junction's continuity letter.
///
/// A missing continuity entry is written as independent.
pub fn encode_curve(curve: &Curve) -> Result<String> {
    let mut out = String::new();
    for (i, seg) in curve.segments.iter().enumerate() {
        if i > 0 {
            let mode = curve.continuity.get(i - 1).copied().unwrap_or_default();
            out.push('-');
            out.push(continuity_letter(mode));
        }
        out.push_str(&encode_segment(seg)?);
    }
    Ok(out)
}

/// Curves joined by `!`; no curves encode to the empty string.
pub fn encode_curves(curves: &[Curve]) -> Result<String> {
    let parts = curves.iter().map(encode_curve).collect::<Result<Vec<_>>>()?;
    Ok(parts.join("!"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bzc_geometry::Continuity;
    use bzc_math::dvec2;

    #[test]
    fn test_format_integral() {
        assert_eq!(format_coord(0.0).unwrap(), "0");
        assert_eq!(format_coord(200.0).unwrap(), "200");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_coord(-50.0).unwrap(), "n50");
        assert_eq!(format_coord(-0.25).unwrap(), "n0.2");
    }

    #[test]
    fn test_format_rounds_to_one_decimal() {
        assert_eq!(format_coord(12.34).unwrap(), "12.3");
        assert_eq!(format_coord(12.36).unwrap(), "12.4");
        assert_eq!(format_coord(0.25).unwrap(), "0.3");
        assert_eq!(format_coord(99.96).unwrap(), "100");
    }

    #[test]
    fn test_negative_zero_has_no_prefix() {
        assert_eq!(format_coord(-0.0).unwrap(), "0");
        assert_eq!(format_coord(-0.04).unwrap(), "0");
        assert_eq!(format_coord(-0.05).unwrap(), "0");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(format_coord(f64::NAN).is_err());
        assert!(format_coord(f64::INFINITY).is_err());
    }

    #[test]
    fn test_overflowing_coordinate_rejected() {
        let err = format_coord(1.7e308).unwrap_err();
        assert!(matches!(err, BzcError::Geometry(_)), "{err}");
        assert!(format_coord(-1.7e308).is_err());
        assert!(format_coord(1e300).is_ok());
    }

    #[test]
    fn test_encode_segment() {
        let seg = Segment::new(
            dvec2(0.0, 0.0),
            dvec2(50.0, 100.0),
            dvec2(150.0, 100.0),
            dvec2(200.0, 0.0),
        );
        assert_eq!(encode_segment(&seg).unwrap(), "0~0_50~100_150~100_200~0");
    }

    #[test]
    fn test_encode_curve_letters() {
        let a = Segment::line(dvec2(0.0, 0.0), dvec2(3.0, 0.0));
        let b = Segment::line(dvec2(3.0, 0.0), dvec2(6.0, 0.0));
        let c = Segment::line(dvec2(6.0, 0.0), dvec2(9.0, 0.0));
        let curve = Curve::new(vec![a, b, c], vec![Continuity::C1, Continuity::C2]);
        assert_eq!(
            encode_curve(&curve).unwrap(),
            "0~0_1~0_2~0_3~0-t3~0_4~0_5~0_6~0-c6~0_7~0_8~0_9~0"
        );
    }

    #[test]
    fn test_encode_no_curves() {
        assert_eq!(encode_curves(&[]).unwrap(), "");
    }
}
