use bzc_geometry::{Continuity, Segment};

use super::curve::Curve;

/// One junction of a curve: the two segments meeting there and the
/// constraint recorded for it.
#[derive(Debug, Clone, Copy)]
pub struct Junction<'a> {
    pub index: usize,
    pub prev: &'a Segment,
    pub next: &'a Segment,
    pub mode: Continuity,
}

/// Iterator over consecutive segment pairs of a curve.
///
/// A junction whose continuity entry is missing reports `Independent`.
pub struct JunctionIter<'a> {
    curve: &'a Curve,
    index: usize,
}

impl<'a> JunctionIter<'a> {
    pub fn new(curve: &'a Curve) -> Self {
        Self { curve, index: 0 }
    }
}

impl<'a> Iterator for JunctionIter<'a> {
    type Item = Junction<'a>;

    fn next(&mut self) -> Option<Junction<'a>> {
        let i = self.index;
        let prev = self.curve.segments.get(i)?;
        let next = self.curve.segments.get(i + 1)?;
        self.index += 1;
        Some(Junction {
            index: i,
            prev,
            next,
            mode: self.curve.continuity.get(i).copied().unwrap_or_default(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self
            .curve
            .segments
            .len()
            .saturating_sub(1)
            .saturating_sub(self.index);
        (n, Some(n))
    }
}

impl ExactSizeIterator for JunctionIter<'_> {}
