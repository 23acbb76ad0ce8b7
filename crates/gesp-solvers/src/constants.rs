//! Judge problem limits
//!
//! Bounds stated by the original problem statements. Solvers assert the
//! ones the originals assert; the rest document the shapes the algorithms
//! are sized for.

// =============================================================================
// Input bounds
// =============================================================================

/// Sequence length limit for the duplicate-threshold problem (10^5)
pub const MAX_SEQUENCE_LEN: usize = 100_000;

/// Largest value appearing in duplicate-threshold sequences (10^5)
pub const MAX_VALUE: i64 = 100_000;

/// Grid side limit for the stain-area problem
pub const MAX_GRID_SIDE: usize = 100;

/// Tier count limit for the tier-purchase problem
pub const MAX_TIERS: usize = 1_000;

// =============================================================================
// Lucky-number sieve
// =============================================================================

/// Sieve bound for the lucky-numbers problem (1001^2, covers every query)
pub const LUCKY_SIEVE_BOUND: usize = 1001 * 1001;

// =============================================================================
// File extensions recognized by the case runner
// =============================================================================

/// Input file extension
pub const CASE_INPUT_EXT: &str = "in";

/// Expected-answer file extension
pub const CASE_ANSWER_EXT: &str = "ans";
