//! Output formatting for scan results.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::ensemble::Vote;
use crate::schema::FeatureVector;

#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// File path, or record id for structured input.
    pub sample: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    pub score: f32,
    pub is_malicious: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<[Vote; 4]>,
    /// Why extraction failed; the score is then the fail-safe value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScanResult {
    pub fn is_unparseable(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {s}. Use 'text' or 'json'.")),
        }
    }
}

pub fn print_results(results: &[ScanResult], format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", render_text(results)),
        OutputFormat::Json => println!("{}", render_json(results)),
    }
}

pub fn render_text(results: &[ScanResult]) -> String {
    let malicious: Vec<_> = results.iter().filter(|r| r.is_malicious).collect();
    let unparseable: Vec<_> = results.iter().filter(|r| r.is_unparseable()).collect();
    let clean = results.len() - malicious.len();

    let rule = "=".repeat(70);
    let mut out = String::new();
    out.push_str(&format!("\n{rule}\nSCAN RESULTS\n{rule}\n"));

    if !malicious.is_empty() {
        out.push_str(&format!("\nMALICIOUS ({}):\n", malicious.len()));
        for r in &malicious {
            out.push_str(&format!("  [{:.2}] {}", r.score, r.sample));
            if let Some(votes) = &r.votes {
                let bits: Vec<String> = votes.iter().map(|v| v.verdict.to_string()).collect();
                out.push_str(&format!("  [votes: {}]", bits.join("")));
            }
            out.push('\n');
        }
    }

    if !unparseable.is_empty() {
        out.push_str(&format!("\nUNPARSEABLE ({}):\n", unparseable.len()));
        for r in &unparseable {
            let err = r.error.as_deref().unwrap_or("unknown");
            out.push_str(&format!("  [ERR ] {} -- {}\n", r.sample, err));
        }
    }

    out.push_str("\nSUMMARY:\n");
    out.push_str(&format!("  Total samples scored: {}\n", results.len()));
    out.push_str(&format!("  Malicious:            {}\n", malicious.len()));
    out.push_str(&format!("  Clean:                {}\n", clean));
    out.push_str(&format!("  Unparseable:          {}\n", unparseable.len()));
    out.push_str(&format!("{rule}\n"));
    out
}

pub fn render_json(results: &[ScanResult]) -> String {
    let output = serde_json::json!({
        "results": results,
        "summary": {
            "total": results.len(),
            "malicious": results.iter().filter(|r| r.is_malicious).count(),
            "clean": results.iter().filter(|r| !r.is_malicious).count(),
            "unparseable": results.iter().filter(|r| r.is_unparseable()).count(),
        }
    });
    serde_json::to_string_pretty(&output).unwrap_or_default()
}

pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// Compute SHA-256 hash of a file.
pub fn sha256_file(path: &Path) -> Result<String> {
    let data = std::fs::read(path).with_context(|| format!("Cannot read {}", path.display()))?;
    Ok(sha256_hex(&data))
}
