//! Per-window summary lines for the accuracy and mapping-quality reports.
//!
//! Both reports emit BED-style tab-separated lines, one per window:
//!
//! - mapq:     `seqname  start  end  mean_mapq` (`NA` for empty windows)
//! - accuracy: `seqname  start  end  true_positives  total_reads`

use std::io::Write;

use anyhow::Result;

use crate::accuracy::{is_correct_aln, validate_wiggle};
use crate::dwgsim::DwgsimRead;
use crate::errors::EvalError;
use crate::windows::{GenomicWindow, ReadObs, SlidingWindows};

/// Which per-window summary to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Accuracy,
    Mapq,
}

/// Mean mapping quality over a window's reads, `None` when there are none.
/// The distinction matters downstream: an empty window prints as `NA`
/// instead of a number that could be mistaken for a computed mean.
pub fn mean_mapq(reads: &[ReadObs]) -> Option<f64> {
    if reads.is_empty() {
        return None;
    }
    let sum: u64 = reads.iter().map(|r| u64::from(r.mapq)).sum();
    Some(sum as f64 / reads.len() as f64)
}

/// Format the mapping-quality line for one window.
pub fn mapq_line(window: &GenomicWindow, reads: &[ReadObs]) -> String {
    match mean_mapq(reads) {
        Some(mean) => format!(
            "{}\t{}\t{}\t{}",
            window.seqname, window.start, window.end, mean
        ),
        None => format!("{}\t{}\t{}\tNA", window.seqname, window.start, window.end),
    }
}

/// Format the accuracy line for one window.
///
/// Each read's assigned reference is resolved through `refs` (indexed by
/// target id) and its ground truth decoded from the query name. A name
/// that fails to decode aborts the report; ground truth is a precondition
/// of the input, not a per-read maybe. `wiggle` is assumed to have been
/// validated once by the caller before the first window.
pub fn accuracy_line(
    window: &GenomicWindow,
    reads: &[ReadObs],
    refs: &[String],
    wiggle: i64,
) -> Result<String, EvalError> {
    let mut true_positives = 0usize;
    for read in reads {
        let truth = DwgsimRead::from_qname(&read.qname)?;
        if is_correct_aln(&refs[read.tid as usize], read.pos, &truth, wiggle) {
            true_positives += 1;
        }
    }
    Ok(format!(
        "{}\t{}\t{}\t{}\t{}",
        window.seqname,
        window.start,
        window.end,
        true_positives,
        reads.len()
    ))
}

/// Stream one summary line per window to `out`.
///
/// For the accuracy report the wiggle is checked eagerly, before the
/// first window, so a degenerate tolerance never produces output.
pub fn write_report<W: Write>(
    out: &mut W,
    windows: SlidingWindows<'_>,
    refs: &[String],
    wiggle: i64,
    kind: ReportKind,
) -> Result<()> {
    if kind == ReportKind::Accuracy {
        validate_wiggle(wiggle)?;
    }
    for (window, reads) in windows {
        match kind {
            ReportKind::Accuracy => {
                let line = accuracy_line(&window, reads, refs, wiggle)?;
                writeln!(out, "{line}")?;
            }
            ReportKind::Mapq => {
                writeln!(out, "{}", mapq_line(&window, reads))?;
            }
        }
    }
    Ok(())
}
