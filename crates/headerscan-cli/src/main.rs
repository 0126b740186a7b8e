//! headerscan CLI - scores PE files with a fixed four-classifier rule ensemble.
//!
//! Usage:
//!   headerscan scan /path/to/scan
//!   headerscan scan /path/to/scan --threshold 0.75 --format json --executables-only
//!   headerscan records train_features.jsonl
//!   headerscan features sample.exe
//!   headerscan audit train_features.jsonl --samples /data/samples

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::atomic::Ordering;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use headerscan_core::consistency::audit_records;
use headerscan_core::ensemble::Ensemble;
use headerscan_core::features::extract_path;
use headerscan_core::report::{OutputFormat, ScanResult, print_results};
use headerscan_core::scan::{ScanConfig, ScanProgress, run_scan, score_records_file};

#[derive(Parser)]
#[command(name = "headerscan", version)]
#[command(about = "PE header rule-ensemble malware scoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score PE files
    Scan {
        /// Paths to scan (files or directories)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Maliciousness threshold (0.0-1.0)
        #[arg(short, long, default_value = "0.5", value_parser = parse_threshold)]
        threshold: f32,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only scan files with a PE (MZ) header
        #[arg(long)]
        executables_only: bool,
    },

    /// Score a JSON-lines file of pre-extracted feature records
    Records {
        file: PathBuf,

        /// Maliciousness threshold (0.0-1.0)
        #[arg(short, long, default_value = "0.5", value_parser = parse_threshold)]
        threshold: f32,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the extracted features and votes for one PE file
    Features { path: PathBuf },

    /// Compare binary and record extraction for every record with a sample on disk
    Audit {
        /// JSON-lines file of feature records with a sha256 key
        records: PathBuf,

        /// Sample tree laid out as <dir>/<h0>/<h1>/<h2>/<sha256>
        #[arg(short, long)]
        samples: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

fn parse_threshold(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold must be within 0.0-1.0, got {value}"))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("headerscan=info,headerscan_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Scan {
            paths,
            threshold,
            format,
            executables_only,
        } => {
            let config = ScanConfig {
                target_paths: paths,
                threshold,
                executables_only,
            };
            let progress = ScanProgress::new();

            info!(paths = config.target_paths.len(), threshold, "starting scan");
            eprintln!("[*] Scanning...");
            let results = run_scan(&config, &progress)?;
            eprintln!("[*] Scanned {} files", progress.total.load(Ordering::Relaxed));
            report(&results, format);
        }
        Command::Records {
            file,
            threshold,
            format,
        } => {
            eprintln!("[*] Scoring records from {}...", file.display());
            let progress = ScanProgress::new();
            let results = score_records_file(&file, threshold, &progress)?;
            eprintln!("[*] Scored {} records", progress.scanned.load(Ordering::Relaxed));
            report(&results, format);
        }
        Command::Features { path } => {
            let extraction = extract_path(&path);
            let Some(vector) = extraction.vector() else {
                let reason = extraction
                    .error()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                bail!("{}: unparseable ({reason})", path.display());
            };
            let ensemble = Ensemble::standard();
            print!("{vector}");
            for vote in ensemble.votes(vector) {
                println!("{:<18}{}", format!("{}:", vote.classifier), vote.verdict);
            }
            println!("{:<18}{:.2}", "score:", ensemble.score(&extraction));
        }
        Command::Audit {
            records,
            samples,
            format,
        } => {
            let file = File::open(&records)
                .with_context(|| format!("Cannot open {}", records.display()))?;
            eprintln!("[*] Auditing {} against {}...", records.display(), samples.display());
            let audit = audit_records(BufReader::new(file), &samples)?;

            match format {
                OutputFormat::Text => {
                    for finding in &audit.findings {
                        print!("{finding}");
                    }
                    for err in &audit.errors {
                        eprintln!("[ERR ] {err}");
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&audit)?);
                }
            }
            eprintln!(
                "[*] {} records checked, {} divergent, {} errors",
                audit.checked,
                audit.findings.len(),
                audit.errors.len()
            );
        }
    }

    Ok(())
}

fn report(results: &[ScanResult], format: OutputFormat) {
    if results.is_empty() {
        eprintln!("[*] Nothing to score.");
        return;
    }
    print_results(results, format);
}
