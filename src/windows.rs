//! Sliding genomic windows over a position-sorted alignment stream.

/// Half-open genomic interval `[start, end)` on a named sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomicWindow {
    pub seqname: String,
    pub start: u64,
    pub end: u64,
}

/// Position-level fields of one aligned read, captured once so windows can
/// be assembled without holding whole alignment records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadObs {
    /// Target id of the assigned reference sequence
    pub tid: i32,
    /// 0-based leftmost mapped position
    pub pos: i64,
    /// Mapping quality
    pub mapq: u8,
    /// Query name carrying the simulated ground truth
    pub qname: String,
}

/// Yields every window of `size` bases advancing by `step` across each
/// target sequence, paired with the reads whose start lies inside it.
///
/// Reads must be sorted by `(tid, pos)`, the order of a coordinate-sorted
/// BAM, and `targets` must list the header's sequences in tid order with
/// their lengths. Windows overlap whenever `step < size`, so a read
/// appears in every window containing its start; each window's read set is
/// handed out independently of the others. Targets without any reads still
/// yield all of their (empty) windows, and the last windows of a target
/// are clamped to its length.
pub struct SlidingWindows<'a> {
    reads: &'a [ReadObs],
    targets: &'a [(String, u64)],
    size: u64,
    step: u64,
    tid: usize,
    win_start: u64,
    lo: usize,
}

impl<'a> SlidingWindows<'a> {
    pub fn new(reads: &'a [ReadObs], targets: &'a [(String, u64)], size: u64, step: u64) -> Self {
        assert!(size > 0, "window size must be positive");
        assert!(step > 0, "window step must be positive");
        SlidingWindows {
            reads,
            targets,
            size,
            step,
            tid: 0,
            win_start: 0,
            lo: 0,
        }
    }
}

impl<'a> Iterator for SlidingWindows<'a> {
    type Item = (GenomicWindow, &'a [ReadObs]);

    fn next(&mut self) -> Option<Self::Item> {
        let reads = self.reads;
        let targets = self.targets;
        loop {
            let (name, target_len) = targets.get(self.tid)?;
            let tid = self.tid as i32;

            if self.win_start >= *target_len {
                // Skip any reads left on this target before moving on.
                while self.lo < reads.len() && reads[self.lo].tid <= tid {
                    self.lo += 1;
                }
                self.tid += 1;
                self.win_start = 0;
                continue;
            }

            let start = self.win_start;
            let end = (start + self.size).min(*target_len);
            self.win_start += self.step;

            // Drop reads behind the window; windows only ever move forward.
            while self.lo < reads.len()
                && (reads[self.lo].tid < tid
                    || (reads[self.lo].tid == tid && reads[self.lo].pos < start as i64))
            {
                self.lo += 1;
            }
            let mut hi = self.lo;
            while hi < reads.len() && reads[hi].tid == tid && reads[hi].pos < end as i64 {
                hi += 1;
            }

            let window = GenomicWindow {
                seqname: name.clone(),
                start,
                end,
            };
            return Some((window, &reads[self.lo..hi]));
        }
    }
}
