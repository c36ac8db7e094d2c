/// dwgeval - Windowed accuracy report for DWGSIM-simulated alignments
///
/// Slides a window along every reference sequence of a coordinate-sorted
/// BAM and emits one BED line per window: either how many reads in the
/// window were aligned within the wiggle of their true simulated start,
/// or the window's mean mapping quality.
use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rust_htslib::bam;
use rust_htslib::bam::Read as BamRead;

use dwgeval::report::{write_report, ReportKind};
use dwgeval::windows::{ReadObs, SlidingWindows};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Coordinate-sorted BAM of aligned DWGSIM reads
    bam: String,

    /// Window size in bases
    #[clap(long = "size", default_value = "1000")]
    size: u64,

    /// Distance between successive window starts
    #[clap(long = "step", default_value = "50")]
    step: u64,

    /// Maximum allowed offset between a read's mapped and true start
    #[clap(short = 'w', long = "wiggle", default_value = "5")]
    wiggle: i64,

    /// Which per-window summary to emit
    #[clap(long = "report", value_enum, default_value = "accuracy")]
    report: Report,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Report {
    /// Correctly placed reads out of total reads per window
    Accuracy,
    /// Mean mapping quality per window
    Mapq,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.size == 0 || args.step == 0 {
        bail!("--size and --step must be positive");
    }

    let mut reader = bam::Reader::from_path(&args.bam)
        .with_context(|| format!("failed to open {}", args.bam))?;

    let targets = {
        let header = reader.header();
        let mut targets = Vec::with_capacity(header.target_count() as usize);
        for tid in 0..header.target_count() {
            let name = std::str::from_utf8(header.tid2name(tid))
                .context("reference name is not valid UTF-8")?
                .to_string();
            let len = header
                .target_len(tid)
                .with_context(|| format!("no length for reference '{name}' in the header"))?;
            targets.push((name, len));
        }
        targets
    };

    let mut reads = Vec::new();
    let mut skipped_unmapped = 0u64;
    for result in reader.records() {
        let record = result?;
        if record.is_unmapped() {
            skipped_unmapped += 1;
            continue;
        }
        reads.push(ReadObs {
            tid: record.tid(),
            pos: record.pos(),
            mapq: record.mapq(),
            qname: String::from_utf8_lossy(record.qname()).into_owned(),
        });
    }
    // Window assembly requires (tid, pos) order; don't trust the input
    // to be coordinate-sorted.
    reads.sort_by_key(|r| (r.tid, r.pos));

    log::info!(
        "{} mapped reads over {} reference sequences ({} unmapped skipped)",
        reads.len(),
        targets.len(),
        skipped_unmapped
    );

    let refs: Vec<String> = targets.iter().map(|(name, _)| name.clone()).collect();
    let windows = SlidingWindows::new(&reads, &targets, args.size, args.step);

    let kind = match args.report {
        Report::Accuracy => ReportKind::Accuracy,
        Report::Mapq => ReportKind::Mapq,
    };

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    write_report(&mut out, windows, &refs, args.wiggle, kind)?;

    Ok(())
}
