//! Batch scoring with progress tracking.
//!
//! Samples are independent: each one is read, extracted and scored on a rayon
//! worker, and a failure stays local to its own [`ScanResult`].

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde_json::Value;
use tracing::info;
use walkdir::WalkDir;

use crate::ensemble::Ensemble;
use crate::error::ExtractError;
use crate::features::{ExtractionResult, FeatureSource, extract, extract_record};
use crate::report::{ScanResult, sha256_hex};

/// Configuration for a scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub target_paths: Vec<PathBuf>,
    /// A sample is flagged when its score is at least this value.
    pub threshold: f32,
    pub executables_only: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            target_paths: Vec::new(),
            threshold: 0.5,
            executables_only: false,
        }
    }
}

/// Atomic progress counters, safe to read while a scan runs.
pub struct ScanProgress {
    pub total: AtomicUsize,
    pub scanned: AtomicUsize,
    pub malicious_count: AtomicUsize,
    pub unparseable_count: AtomicUsize,
}

impl ScanProgress {
    pub fn new() -> Self {
        Self {
            total: AtomicUsize::new(0),
            scanned: AtomicUsize::new(0),
            malicious_count: AtomicUsize::new(0),
            unparseable_count: AtomicUsize::new(0),
        }
    }

    fn record(&self, result: &ScanResult) {
        if result.is_malicious {
            self.malicious_count.fetch_add(1, Ordering::Relaxed);
        }
        if result.is_unparseable() {
            self.unparseable_count.fetch_add(1, Ordering::Relaxed);
        }
        self.scanned.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for ScanProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// Check for the `MZ` magic of a PE file.
pub fn is_pe(path: &Path) -> bool {
    let mut magic = [0u8; 2];
    File::open(path)
        .and_then(|mut f| f.read_exact(&mut magic))
        .is_ok()
        && magic == *b"MZ"
}

/// Collect all file paths from the given paths (expanding directories).
pub fn collect_files(paths: &[PathBuf], executables_only: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if !executables_only || is_pe(path) {
                files.push(path.clone());
            }
        } else if path.is_dir() {
            for entry in WalkDir::new(path).follow_links(false).into_iter().flatten() {
                let p = entry.into_path();
                if p.is_file() && (!executables_only || is_pe(&p)) {
                    files.push(p);
                }
            }
        }
    }

    files
}

fn to_result(
    sample: String,
    sha256: Option<String>,
    extraction: &ExtractionResult,
    ensemble: &Ensemble<'_>,
    threshold: f32,
) -> ScanResult {
    let score = ensemble.score(extraction);
    ScanResult {
        sample,
        sha256,
        score,
        is_malicious: score >= threshold,
        features: extraction.vector().copied(),
        votes: extraction.vector().map(|v| ensemble.votes(v)),
        error: extraction.error().map(ToString::to_string),
    }
}

/// Score one file. Unreadable files are extraction failures like any other.
pub fn score_file(path: &Path, ensemble: &Ensemble<'_>, threshold: f32) -> ScanResult {
    let (sha256, extraction) = match fs::read(path) {
        Ok(bytes) => (
            Some(sha256_hex(&bytes)),
            extract(FeatureSource::Binary(&bytes)),
        ),
        Err(e) => (None, ExtractionResult::Failed(ExtractError::from(e))),
    };
    to_result(path.display().to_string(), sha256, &extraction, ensemble, threshold)
}

/// Run a full scan with progress tracking. Blocking.
pub fn run_scan(config: &ScanConfig, progress: &ScanProgress) -> Result<Vec<ScanResult>> {
    let ensemble = Ensemble::standard();

    let files = collect_files(&config.target_paths, config.executables_only);
    progress.total.store(files.len(), Ordering::Relaxed);

    if files.is_empty() {
        return Ok(Vec::new());
    }

    let results: Vec<ScanResult> = files
        .par_iter()
        .map(|path| {
            let result = score_file(path, &ensemble, config.threshold);
            progress.record(&result);
            result
        })
        .collect();

    info!(
        scanned = results.len(),
        malicious = progress.malicious_count.load(Ordering::Relaxed),
        unparseable = progress.unparseable_count.load(Ordering::Relaxed),
        "scan finished"
    );
    Ok(results)
}

/// Score every line of a JSON-lines stream of structured feature records.
///
/// Records are named by their `sha256` key when present, else `line N`.
/// Blank lines are skipped; malformed lines score as extraction failures.
pub fn score_records<R: BufRead>(
    reader: R,
    threshold: f32,
    progress: &ScanProgress,
) -> Result<Vec<ScanResult>> {
    let ensemble = Ensemble::standard();
    let lines: Vec<(usize, String)> = reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|l| (i + 1, l)))
        .collect::<std::io::Result<Vec<_>>>()
        .context("Failed to read records")?
        .into_iter()
        .filter(|(_, l)| !l.trim().is_empty())
        .collect();
    progress.total.store(lines.len(), Ordering::Relaxed);

    let results: Vec<ScanResult> = lines
        .par_iter()
        .map(|(n, line)| {
            let (sample, sha256, extraction) = match serde_json::from_str::<Value>(line) {
                Ok(record) => {
                    let sha256 = record
                        .get("sha256")
                        .and_then(Value::as_str)
                        .map(str::to_string);
                    let sample = sha256.clone().unwrap_or_else(|| format!("line {n}"));
                    (sample, sha256, extract_record(&record))
                }
                Err(e) => (
                    format!("line {n}"),
                    None,
                    ExtractionResult::Failed(ExtractError::from(e)),
                ),
            };
            let result = to_result(sample, sha256, &extraction, &ensemble, threshold);
            progress.record(&result);
            result
        })
        .collect();

    info!(scored = results.len(), "records scored");
    Ok(results)
}

/// Open a JSON-lines records file and score it.
pub fn score_records_file(
    path: &Path,
    threshold: f32,
    progress: &ScanProgress,
) -> Result<Vec<ScanResult>> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    score_records(BufReader::new(file), threshold, progress)
}
