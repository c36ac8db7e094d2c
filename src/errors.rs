//! Error types for ground-truth decoding and evaluation.

use thiserror::Error;

/// Errors raised while decoding a simulated read's ground truth or
/// evaluating an alignment against it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The query name does not match the DWGSIM read-name grammar.
    /// Ground truth cannot be recovered for such a read, so there is no
    /// partially decoded fallback.
    #[error("read name does not match the dwgsim grammar: '{qname}'")]
    MalformedReadName {
        /// The offending query name
        qname: String,
    },

    /// Both mates of a pair claim the same strand. A proper simulated
    /// pair always has one forward and one reverse mate, so the fragment
    /// interval cannot be reconstructed.
    #[error("mates of '{qname}' are both on strand {strand}; cannot reconstruct the fragment")]
    SameStrandPair {
        /// The offending query name
        qname: String,
        /// The strand claimed by both mates (0 forward, 1 reverse)
        strand: u8,
    },

    /// The reconstructed fragment interval is empty or inverted.
    #[error("fragment of '{qname}' is empty or inverted: start {start} >= end {end}")]
    InvertedFragment {
        /// The offending query name
        qname: String,
        /// Computed fragment start
        start: u64,
        /// Computed fragment end
        end: u64,
    },

    /// The requested wiggle exceeds the sanity cap. Past the cap the
    /// predicate degenerates toward "always correct".
    #[error("wiggle {wiggle} is out of range (must be below {cap})")]
    WiggleTooLarge {
        /// The rejected wiggle value
        wiggle: i64,
        /// The exclusive upper bound
        cap: i64,
    },
}
