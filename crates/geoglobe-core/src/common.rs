// crates/geoglobe-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded shape set.
///
/// Returned by [`crate::ShapeSet::stats`], these counts reflect the flattened
/// in-memory list after any feature that failed validation was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShapeStats {
    /// Features in the source collection.
    pub features: usize,
    /// Single-polygon shapes after flattening.
    pub shapes: usize,
    /// Distinct admin codes.
    pub countries: usize,
    /// Features dropped because their geometry was malformed.
    pub skipped: usize,
}
