use crate::weather::Weight;

/// Marks a pair of cities without a connecting route in distance and adjacency matrices.
pub const UNREACHABLE: Weight = Weight::INFINITY;

pub(crate) const INVALID_NODE: usize = usize::MAX;

/// Relative tolerance used when a path cost is compared against a search label.
pub(crate) const WEIGHT_TOLERANCE: Weight = 1e-9;
