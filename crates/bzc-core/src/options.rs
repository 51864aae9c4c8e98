//! Sampling configuration shared by the geometry and render-feed routines.

use serde::{Deserialize, Serialize};

/// Sample counts and flattening limits.
///
/// The defaults match what an interactive editor needs: 100 samples for
/// length and hit-testing, a quarter-unit flattening tolerance for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingOptions {
    /// Polyline samples used by arc-length approximation.
    pub length_samples: usize,
    /// Uniform samples used by nearest-point search.
    pub nearest_samples: usize,
    /// Maximum chord deviation allowed when flattening a segment.
    pub flatten_tolerance: f64,
    /// Recursion limit for adaptive flattening.
    pub max_flatten_depth: u32,
}

impl SamplingOptions {
    pub const DEFAULT_LENGTH_SAMPLES: usize = 100;
    pub const DEFAULT_NEAREST_SAMPLES: usize = 100;
    pub const DEFAULT_FLATTEN_TOLERANCE: f64 = 0.25;
    pub const DEFAULT_MAX_FLATTEN_DEPTH: u32 = 12;
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            length_samples: Self::DEFAULT_LENGTH_SAMPLES,
            nearest_samples: Self::DEFAULT_NEAREST_SAMPLES,
            flatten_tolerance: Self::DEFAULT_FLATTEN_TOLERANCE,
            max_flatten_depth: Self::DEFAULT_MAX_FLATTEN_DEPTH,
        }
    }
}
