//! CLI for the coremetrics ROC/AUC engine.
//!
//! Provides commands for evaluating classifier scores from a dataset file and
//! benchmarking the curve computers.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use coremetrics::{MetricsCurve, RocConfig, RocMode, RocPoint, Samples, evaluate_roc};
use tracing_subscriber::EnvFilter;

/// coremetrics: ROC curve and AUC evaluation for binary classifiers.
#[derive(Parser)]
#[command(name = "coremetrics", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Compute the ROC curve and AUC of a scored dataset.
    Roc {
        /// Dataset file: `.json` ({"scores": [..], "labels": [..]}) or CSV of
        /// `score,label` rows.
        input: PathBuf,

        /// Curve mode (overrides the config file).
        #[arg(long)]
        mode: Option<ModeArg>,

        /// Bucket count for binned mode (overrides the config file).
        #[arg(long)]
        buckets: Option<i32>,

        /// Keep raw scores instead of clamping them into [0, 1].
        #[arg(long)]
        no_clamp: bool,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format.
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },

    /// Run an exact and binned throughput benchmark on synthetic scores.
    Bench {
        /// Number of samples to score.
        #[arg(long, default_value = "1000000")]
        samples: usize,

        /// Bucket count for the binned run.
        #[arg(long, default_value = "100")]
        buckets: i32,
    },
}

/// Curve mode selected on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// One point per distinct score.
    Exact,
    /// Evenly spaced thresholds.
    Binned,
}

impl From<ModeArg> for RocMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Exact => RocMode::Exact,
            ModeArg::Binned => RocMode::Binned,
        }
    }
}

/// Output format for curves.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Aligned text table.
    Table,
    /// Comma-separated values.
    Csv,
    /// JSON object with mode, AUC and points.
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roc {
            input,
            mode,
            buckets,
            no_clamp,
            config,
            format,
        } => resolve_config(config.as_deref(), mode, buckets, no_clamp)
            .and_then(|config| cmd_roc(&input, &config, format)),
        Commands::Bench { samples, buckets } => cmd_bench(samples, buckets),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Builds the effective config: file (or defaults), then flag overrides.
fn resolve_config(
    path: Option<&Path>,
    mode: Option<ModeArg>,
    buckets: Option<i32>,
    no_clamp: bool,
) -> Result<RocConfig, Box<dyn std::error::Error>> {
    let mut config = match path {
        Some(path) => RocConfig::load(path)?,
        None => RocConfig::default(),
    };

    if let Some(mode) = mode {
        config.mode = mode.into();
    }
    if let Some(buckets) = buckets {
        config.buckets = buckets;
    }
    if no_clamp {
        config.clamp_to_unit_interval = false;
    }

    config.validate()?;
    Ok(config)
}

/// Implements `coremetrics roc <input>`.
fn cmd_roc(
    input: &Path,
    config: &RocConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(input = %input.display(), ?config, "roc command started");

    let samples = Samples::load(input)?;
    let curve = evaluate_roc(&samples.scores, &samples.labels, config)?;

    tracing::info!(
        samples = samples.len(),
        points = curve.len(),
        auc = curve.auc(),
        "roc command finished"
    );

    match format {
        OutputFormat::Table => print_table(input, &samples, &curve),
        OutputFormat::Csv => print_csv(curve.points()),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "input": input.display().to_string(),
                "samples": samples.len(),
                "positives": samples.positives(),
                "mode": curve.mode(),
                "auc": curve.auc(),
                "points": curve.points(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn print_table(input: &Path, samples: &Samples, curve: &MetricsCurve) {
    let mode = match curve.mode() {
        RocMode::Exact => "exact",
        RocMode::Binned => "binned",
    };

    println!("Dataset: {}", input.display());
    println!(
        "  Samples: {} ({} positive, {} negative)",
        samples.len(),
        samples.positives(),
        samples.len() - samples.positives()
    );
    println!("  Mode: {mode}");
    println!("  Points: {}", curve.len());
    println!();
    println!("{:>12} {:>10} {:>10}", "threshold", "fpr", "tpr");
    println!("{}", "-".repeat(34));
    for point in curve.points() {
        println!(
            "{:>12} {:>10.6} {:>10.6}",
            format_threshold(point.threshold),
            point.fpr,
            point.tpr
        );
    }
    println!();
    println!("AUC: {:.6}", curve.auc());
}

fn print_csv(points: &[RocPoint]) {
    println!("threshold,fpr,tpr");
    for point in points {
        println!("{},{},{}", point.threshold, point.fpr, point.tpr);
    }
}

/// Formats a threshold for the table, spelling out the infinite sentinels.
fn format_threshold(threshold: f32) -> String {
    if threshold == f32::INFINITY {
        "+inf".to_string()
    } else if threshold == f32::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{threshold:.6}")
    }
}

/// Implements `coremetrics bench`.
#[allow(clippy::cast_precision_loss)] // Timing figures are display-only
fn cmd_bench(samples: usize, buckets: i32) -> Result<(), Box<dyn std::error::Error>> {
    println!("coremetrics ROC benchmark");
    println!("  Samples: {samples}");
    println!("  Buckets: {buckets}");
    println!();

    tracing::info!(samples, buckets, "bench command started");
    let (scores, labels) = synthetic_samples(samples);

    let runs = [
        ("exact", RocConfig::exact()),
        ("binned", RocConfig::binned(buckets)?),
    ];

    println!("Results:");
    for (name, config) in &runs {
        let start = Instant::now();
        let curve = evaluate_roc(&scores, &labels, config)?;
        let elapsed = start.elapsed();

        let ns_per_sample = elapsed.as_nanos() as f64 / samples.max(1) as f64;
        let samples_per_sec = samples as f64 / elapsed.as_secs_f64();

        println!("  {name}:");
        println!("    Points: {}", curve.len());
        println!("    AUC: {:.6}", curve.auc());
        println!("    Elapsed: {elapsed:.3?}");
        println!("    Avg cost: {ns_per_sample:.1} ns/sample");
        println!("    Throughput: {samples_per_sec:.0} samples/sec");
        tracing::debug!(run = *name, elapsed_ms = elapsed.as_secs_f64() * 1e3, "bench run finished");
    }
    println!();

    Ok(())
}

/// Deterministic synthetic scores where positives lean high.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn synthetic_samples(n: usize) -> (Vec<f32>, Vec<bool>) {
    let mut state = 0x853c_49e6_748f_ea9b_u64;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 40) as f32 / (1u64 << 24) as f32
    };

    let mut scores = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);
    for _ in 0..n {
        let positive = next() < 0.3;
        let noise = next();
        scores.push(if positive {
            0.35 + 0.65 * noise
        } else {
            0.7 * noise
        });
        labels.push(positive);
    }
    (scores, labels)
}
