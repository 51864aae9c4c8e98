//! Real roots of low-degree polynomials.

/// Real roots of `a t^2 + b t + c = 0`.
///
/// When `|a| <= eps` the equation is treated as linear; when both `a` and `b`
/// vanish there are no roots. A double root is reported once.
pub fn quadratic_roots(a: f64, b: f64, c: f64, eps: f64) -> Vec<f64> {
    if a.abs() <= eps {
        if b.abs() <= eps {
            return Vec::new();
        }
        return vec![-c / b];
    }

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return Vec::new();
    }
    if disc == 0.0 {
        return vec![-b / (2.0 * a)];
    }

    let sq = disc.sqrt();
    vec![(-b + sq) / (2.0 * a), (-b - sq) / (2.0 * a)]
}
