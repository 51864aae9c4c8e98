use bzc_core::error::{BzcError, Result};
use bzc_core::traits::Validate;
use bzc_core::Tolerance;

use super::collection::CurveCollection;
use super::curve::Curve;

impl Curve {
    /// Check the junction invariant within `tol`.
    pub fn validate_with(&self, tol: Tolerance) -> Result<()> {
        let expected = self.junction_count();
        if self.continuity.len() != expected {
            return Err(BzcError::Topology(format!(
                "Curve with {} segments has {} continuity entries, expected {}",
                self.segments.len(),
                self.continuity.len(),
                expected
            )));
        }

        for junction in self.junctions() {
            let gap = junction.prev.p3 - junction.next.p0;
            if !tol.is_zero(gap.x) || !tol.is_zero(gap.y) {
                return Err(BzcError::Topology(format!(
                    "Junction {} is open: segment {} ends at {:?}, segment {} starts at {:?}",
                    junction.index,
                    junction.index,
                    junction.prev.p3,
                    junction.index + 1,
                    junction.next.p0
                )));
            }
        }

        Ok(())
    }
}

impl Validate for Curve {
    fn validate(&self) -> Result<()> {
        self.validate_with(Tolerance::default())
    }
}

impl Validate for CurveCollection {
    fn validate(&self) -> Result<()> {
        if let Some(active) = self.active {
            if active >= self.curves.len() {
                return Err(BzcError::Topology(format!(
                    "Active curve {} out of range ({} curves)",
                    active,
                    self.curves.len()
                )));
            }
        }
        for (i, curve) in self.curves.iter().enumerate() {
            if curve.is_empty() {
                return Err(BzcError::Topology(format!("Curve {i} has no segments")));
            }
            curve
                .validate()
                .map_err(|e| BzcError::Topology(format!("Curve {i}: {e}")))?;
        }
        Ok(())
    }
}
