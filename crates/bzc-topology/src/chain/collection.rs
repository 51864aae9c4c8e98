use serde::{Deserialize, Serialize};

use super::curve::Curve;

/// Ordered curves plus the curve currently being edited.
///
/// `active == None` means no curve is active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveCollection {
    pub curves: Vec<Curve>,
    pub active: Option<usize>,
}

impl CurveCollection {
    pub fn new(curves: Vec<Curve>, active: Option<usize>) -> Self {
        Self { curves, active }
    }

    /// Collection with no active curve, as restored from a share string.
    pub fn from_curves(curves: Vec<Curve>) -> Self {
        Self {
            curves,
            active: None,
        }
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn active_curve(&self) -> Option<&Curve> {
        self.active.and_then(|i| self.curves.get(i))
    }

    /// New collection with `curve` appended and made active.
    pub fn with_curve(&self, curve: Curve) -> CurveCollection {
        let mut curves = self.curves.clone();
        curves.push(curve);
        let active = Some(curves.len() - 1);
        CurveCollection { curves, active }
    }

    /// New collection with curve `index` replaced; out of range yields an
    /// unchanged copy.
    pub fn with_replaced(&self, index: usize, curve: Curve) -> CurveCollection {
        let mut out = self.clone();
        if let Some(slot) = out.curves.get_mut(index) {
            *slot = curve;
        }
        out
    }
}
