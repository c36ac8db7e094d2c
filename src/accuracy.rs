//! Positional correctness of an alignment against its encoded ground truth.

use crate::dwgsim::DwgsimRead;
use crate::errors::EvalError;

/// Exclusive upper bound on the wiggle accepted by the windowed accuracy
/// report. Typical short-read fragments are hundreds of bases, so any
/// tolerance approaching read scale makes the predicate meaningless.
pub const MAX_WIGGLE: i64 = 20;

/// Reject wiggles at or above [`MAX_WIGGLE`] before any window is processed.
pub fn validate_wiggle(wiggle: i64) -> Result<(), EvalError> {
    if wiggle >= MAX_WIGGLE {
        return Err(EvalError::WiggleTooLarge {
            wiggle,
            cap: MAX_WIGGLE,
        });
    }
    Ok(())
}

/// Whether an alignment landed within `wiggle` of the read's true start.
///
/// An alignment on the wrong sequence is never correct, whatever the
/// wiggle. Otherwise the mapped position is tested against both mates'
/// true starts, since the record is not matched to a specific mate;
/// fragments are always far longer than any sane wiggle, so the two
/// starts cannot be confused.
///
/// The offset test is signed and one-sided: `true_start - pos <= wiggle`.
/// An alignment upstream of the true start by more than `wiggle` fails,
/// but one arbitrarily far downstream always passes. Callers relying on
/// this function inherit that asymmetry; see
/// `one_sided_wiggle_accepts_downstream_alignments` in the tests.
pub fn is_correct_aln(rname: &str, pos: i64, truth: &DwgsimRead, wiggle: i64) -> bool {
    if rname != truth.seqname {
        return false;
    }
    truth.start_1 as i64 - pos <= wiggle || truth.start_2 as i64 - pos <= wiggle
}
