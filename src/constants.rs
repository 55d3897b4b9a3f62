//! Cross-cutting, shared constants.
//!
//! The fusion thresholds are hand-tuned and shared by the heuristic and classifier paths.
//! Secondary values (e.g. the scoring neighbor bound) are derived from primary ones.

/// Upper bound on how much sentiment may shrink a bias magnitude (at most by 2/3).
///
/// Also the clamp value applied to weak neighbor labels in the heuristic path.
pub const MAGNITUDE_CAP: f32 = 0.33;

/// Label magnitude above which sentiment is allowed to flip the bias direction.
pub const SENTIMENT_THRESHOLD: f32 = 0.4;

/// Similarity at or above which sentiment is ignored entirely.
pub const SEMANTIC_THRESHOLD: f32 = 0.75;

/// Extra candidates scanned beyond the blacklisted items during scoring.
///
/// `k = blacklisted items + NEIGHBOR_BOUND_MARGIN` keeps at least one
/// admissible reference sentence among the top-`k` candidates whenever the
/// corpus has one.
pub const NEIGHBOR_BOUND_MARGIN: usize = 2;

/// Candidates scanned per sentence when the corpus is queried against itself.
pub const TRAINING_NEIGHBORS: usize = 5;

/// Dimension produced by the deterministic stub embedder.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Maximum inputs per embedder HTTP request.
pub const EMBED_BATCH_SIZE: usize = 64;

/// Returns the neighbor bound `k` for a working corpus with `blacklisted_items`
/// blacklisted entries.
///
/// Count entries, not distinct texts: a quoted corpus sentence is blacklisted
/// twice, once in the evaluated prefix and once in the reference suffix.
#[inline]
pub fn scoring_neighbor_bound(blacklisted_items: usize) -> usize {
    blacklisted_items + NEIGHBOR_BOUND_MARGIN
}
