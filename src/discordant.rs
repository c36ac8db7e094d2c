//! Extraction of discordant alignments from a simulated-read stream.
//!
//! A record is discordant when it is mapped but its position is outside
//! the wiggle of both true mate starts encoded in its name. Unmapped
//! records are a separate counted outcome and never reach the predicate.

use anyhow::{Context, Result};
use rust_htslib::bam;
use rust_htslib::errors::Error as HtslibError;

use crate::accuracy::is_correct_aln;
use crate::dwgsim::DwgsimRead;
use crate::errors::EvalError;

/// Counters accumulated over one pass of the stream, reported on stderr
/// once the input is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub total: u64,
    pub incorrect: u64,
    pub unmapped: u64,
}

/// Single pass over an alignment-record stream, calling `emit` for every
/// discordant record together with its decoded ground truth.
///
/// `refs` maps target ids to reference names in header order. Decode
/// failures are fatal: every record in a simulated-read BAM is expected
/// to carry the ground-truth grammar in its name.
pub fn scan_records<I, F>(records: I, refs: &[String], wiggle: i64, mut emit: F) -> Result<ScanStats>
where
    I: IntoIterator<Item = std::result::Result<bam::Record, HtslibError>>,
    F: FnMut(&bam::Record, &DwgsimRead) -> Result<()>,
{
    let mut stats = ScanStats::default();

    for result in records {
        let record = result?;
        stats.total += 1;

        if record.is_unmapped() {
            stats.unmapped += 1;
            continue;
        }

        let qname = std::str::from_utf8(record.qname()).map_err(|_| {
            EvalError::MalformedReadName {
                qname: String::from_utf8_lossy(record.qname()).into_owned(),
            }
        })?;
        let truth = DwgsimRead::from_qname(qname)?;

        let tid = record.tid();
        let rname = refs.get(tid as usize).with_context(|| {
            format!("record '{qname}' has target id {tid} outside the header")
        })?;

        if !is_correct_aln(rname, record.pos(), &truth, wiggle) {
            stats.incorrect += 1;
            emit(&record, &truth)?;
        }
    }

    Ok(stats)
}

/// BED line for one discordant record: the interval of the true fragment
/// its pair was simulated from. The record's own sequence length stands
/// in for both mates.
pub fn fragment_bed_line(record: &bam::Record, truth: &DwgsimRead) -> Result<String, EvalError> {
    let (start, end) = truth.fragment_interval(record.seq_len() as u64)?;
    Ok(format!("{}\t{}\t{}", truth.seqname, start, end))
}
