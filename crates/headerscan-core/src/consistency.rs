//! Cross-checks feature vectors extracted from two sources for the same
//! sample: a PE binary on disk against its structured feature record.
//!
//! Not part of the scoring path. Disagreements are expected now and then:
//! `VirtualSize2` is positional, and parsers can disagree about which entry
//! is the second section of a malformed table.

use std::fmt;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::features::{ExtractionResult, FeatureSource, extract, extract_record};
use crate::report::sha256_hex;
use crate::schema::{Feature, FeatureVector};

/// One feature on which two vectors disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Divergence {
    pub feature: Feature,
    pub left: f64,
    pub right: f64,
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("{}:", self.feature);
        write!(f, "{label:<18}{} != {}", self.left, self.right)
    }
}

/// Per-feature differences in canonical order. Empty when all seven match.
pub fn diff_vectors(left: &FeatureVector, right: &FeatureVector) -> Vec<Divergence> {
    left.iter()
        .zip(right.iter())
        .filter(|((_, a), (_, b))| a != b)
        .map(|((feature, a), (_, b))| Divergence {
            feature,
            left: a,
            right: b,
        })
        .collect()
}

/// Compare two extractions. `None` if either failed; comparing against a
/// failed extraction has no meaning.
pub fn diff(left: &ExtractionResult, right: &ExtractionResult) -> Option<Vec<Divergence>> {
    Some(diff_vectors(left.vector()?, right.vector()?))
}

/// Location of a sample in a hash-sharded tree: `<dir>/<h0>/<h1>/<h2>/<sha256>`.
///
/// `None` unless `sha256` is 64 hex digits, so the path stays under `samples_dir`.
pub fn sample_path(samples_dir: &Path, sha256: &str) -> Option<PathBuf> {
    if sha256.len() != 64 || !sha256.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let shard = &sha256[..3];
    Some(
        samples_dir
            .join(&shard[0..1])
            .join(&shard[1..2])
            .join(&shard[2..3])
            .join(sha256),
    )
}

/// A sample whose binary and record extractions disagree.
#[derive(Debug, Clone, Serialize)]
pub struct AuditFinding {
    pub sha256: String,
    pub divergences: Vec<Divergence>,
}

impl fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.sha256)?;
        for d in &self.divergences {
            let label = format!("{}:", d.feature);
            writeln!(f, "{label:<18}binary: {} record: {}", d.left, d.right)?;
        }
        Ok(())
    }
}

/// Extract one record's sample from `samples_dir` and compare both sources.
///
/// Returns `Ok(None)` when they agree or when either extraction failed.
/// Errors on records without a `sha256` key and on samples whose content hash
/// does not match the record.
pub fn audit_record(record: &Value, samples_dir: &Path) -> Result<Option<AuditFinding>> {
    let Some(sha256) = record.get("sha256").and_then(Value::as_str) else {
        bail!("record has no sha256");
    };
    let path = sample_path(samples_dir, sha256)
        .with_context(|| format!("not a sha256 hex digest: {sha256:?}"))?;

    let from_binary = match fs::read(&path) {
        Ok(bytes) => {
            let actual = sha256_hex(&bytes);
            if !actual.eq_ignore_ascii_case(sha256) {
                warn!(expected = sha256, actual = %actual, "sample content does not match its record");
                bail!("{} hashes to {actual}, expected {sha256}", path.display());
            }
            extract(FeatureSource::Binary(&bytes))
        }
        Err(e) => {
            debug!("skipping {sha256}: cannot read {}: {e}", path.display());
            return Ok(None);
        }
    };
    let from_record = extract_record(record);

    match diff(&from_binary, &from_record) {
        Some(divergences) if !divergences.is_empty() => Ok(Some(AuditFinding {
            sha256: sha256.to_string(),
            divergences,
        })),
        Some(_) => Ok(None),
        None => {
            debug!("skipping {sha256}: extraction failed on at least one source");
            Ok(None)
        }
    }
}

/// Outcome of auditing a JSON-lines file of records.
#[derive(Debug, Default, Serialize)]
pub struct AuditReport {
    pub checked: usize,
    pub findings: Vec<AuditFinding>,
    pub errors: Vec<String>,
}

/// Audit every record in a JSON-lines stream against the sample tree.
pub fn audit_records<R: BufRead>(reader: R, samples_dir: &Path) -> Result<AuditReport> {
    let lines: Vec<String> = reader
        .lines()
        .collect::<std::io::Result<_>>()
        .context("Failed to read records")?;

    let outcomes: Vec<Result<Option<AuditFinding>>> = lines
        .par_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let record: Value = serde_json::from_str(line)
                .with_context(|| format!("line {}: invalid JSON", i + 1))?;
            audit_record(&record, samples_dir).with_context(|| format!("line {}", i + 1))
        })
        .collect();

    let mut report = AuditReport::default();
    for outcome in outcomes {
        report.checked += 1;
        match outcome {
            Ok(Some(finding)) => report.findings.push(finding),
            Ok(None) => {}
            Err(e) => report.errors.push(format!("{e:#}")),
        }
    }
    info!(
        checked = report.checked,
        divergent = report.findings.len(),
        errors = report.errors.len(),
        "audit finished"
    );
    Ok(report)
}
