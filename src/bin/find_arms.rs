use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser};
use log::info;

use flanker::arms::{self, DEFAULT_ARM_LENGTH, HomologyArmPair};
use flanker::cli;
use flanker::config::JobConfig;
use flanker::ensembl;
use flanker::feature::{FeatureKind, transcript_features};
use flanker::transcript::TranscriptRecord;

#[derive(Parser)]
#[command(
    name = "find_arms",
    about = "Resolve the homology arms flanking each transcript's coding start",
    group(ArgGroup::new("mode").required(true).args(["sequence", "config"]))
)]
struct Cli {
    /// Saved Ensembl sequence payload (JSON) for a single transcript
    #[arg(long = "seq", value_name = "FILE", requires = "overlap")]
    sequence: Option<PathBuf>,

    /// Saved Ensembl overlap payload (JSON) with the transcript's exon/cds rows
    #[arg(
        long,
        value_name = "FILE",
        requires = "sequence",
        conflicts_with = "config"
    )]
    overlap: Option<PathBuf>,

    /// JSON job configuration for batch runs
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Homology arm length in bases
    #[arg(
        short = 'a',
        long = "arm-length",
        default_value_t = DEFAULT_ARM_LENGTH,
        conflicts_with = "config"
    )]
    arm_length: i64,

    /// Write the TSV report here instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
}

struct Job {
    label: String,
    sequence: PathBuf,
    overlap: PathBuf,
    arm_length: i64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let start = Instant::now();
    let cli_args = Cli::parse();

    cli::banner("Find Homology Arms");

    // ── Configuration ────────────────────────────────────
    cli::section("Configuration");

    let jobs = build_jobs(&cli_args)?;

    cli::kv("Jobs", &jobs.len().to_string());
    match &cli_args.output {
        Some(path) => cli::kv("Report", &path.display().to_string()),
        None => cli::kv("Report", "stdout"),
    }

    eprintln!();

    // ── Homology Arms ────────────────────────────────────
    cli::section("Homology Arms");

    let mut report: Box<dyn Write> = match &cli_args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(
            || format!("failed to create report file: {}", path.display()),
        )?)),
        None => Box::new(std::io::stdout().lock()),
    };

    let mut failed = 0usize;
    for job in &jobs {
        match run_job(job) {
            Ok((record, pair)) => {
                cli::success(&format!(
                    "{}  left {}  right {}",
                    record.transcript_id, pair.left, pair.right
                ));
                writeln!(
                    report,
                    "{}\t{}\t{}",
                    record.transcript_id, pair.left, pair.right
                )?;
            }
            Err(e) => {
                cli::warning(&format!("{}: {e:#}", job.label));
                failed += 1;
            }
        }
    }
    report.flush()?;

    if failed > 0 {
        bail!("{failed} of {} job(s) failed", jobs.len());
    }

    // ── Summary ──────────────────────────────────────────
    cli::print_summary(start);
    Ok(())
}

fn build_jobs(cli_args: &Cli) -> Result<Vec<Job>> {
    if let Some(path) = &cli_args.config {
        let config = JobConfig::from_file(path)?;
        return Ok(config
            .jobs
            .iter()
            .map(|job| Job {
                label: job.label(),
                sequence: job.sequence.clone(),
                overlap: job.overlap.clone(),
                arm_length: config.effective_arm_length(job),
            })
            .collect());
    }

    if cli_args.arm_length < 1 {
        bail!(
            "--arm-length must be at least 1, got {}",
            cli_args.arm_length
        );
    }

    match (&cli_args.sequence, &cli_args.overlap) {
        (Some(sequence), Some(overlap)) => Ok(vec![Job {
            label: sequence.display().to_string(),
            sequence: sequence.clone(),
            overlap: overlap.clone(),
            arm_length: cli_args.arm_length,
        }]),
        _ => bail!("either --config or both --seq and --overlap are required"),
    }
}

fn run_job(job: &Job) -> Result<(TranscriptRecord, HomologyArmPair)> {
    let response = ensembl::read_sequence_file(&job.sequence)
        .with_context(|| format!("failed to read sequence payload: {}", job.sequence.display()))?;
    let rows = ensembl::read_overlap_file(&job.overlap)
        .with_context(|| format!("failed to read overlap payload: {}", job.overlap.display()))?;

    let record = TranscriptRecord::from_response(response);
    let features = ensembl::collect_features(&rows);

    let exons = transcript_features(&features, &record.transcript_id, FeatureKind::Exon).len();
    let coding =
        transcript_features(&features, &record.transcript_id, FeatureKind::CodingSegment).len();
    info!("{record}: {exons} exon(s), {coding} coding segment(s)");

    let pair = arms::n_terminal_arms(&record, &features, job.arm_length)?;
    Ok((record, pair))
}
