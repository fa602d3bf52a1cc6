use serde::{Deserialize, Serialize};

/// Per-point classification handed to computed style values.
///
/// Recomputed on every render; never stored. `min`/`max` compare against the
/// effective value domain, so an explicit `min`/`max` override shifts which
/// points classify as extremes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointMeta {
    pub first: bool,
    pub last: bool,
    pub min: bool,
    pub max: bool,
}

impl PointMeta {
    #[must_use]
    pub fn classify(index: usize, len: usize, value: f64, domain_min: f64, domain_max: f64) -> Self {
        Self {
            first: index == 0,
            last: index + 1 == len,
            min: value <= domain_min,
            max: value >= domain_max,
        }
    }
}
