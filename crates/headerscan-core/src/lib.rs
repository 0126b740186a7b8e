//! headerscan-core: shared library for PE header rule scoring.
//!
//! Extracts seven structural features from a PE header (or a pre-extracted
//! feature record), runs four fixed decision-rule classifiers over them, and
//! averages their verdicts into a suspicion score. Also provides the
//! cross-source consistency audit, batch scanning and result reporting used
//! by the CLI.

pub mod consistency;
pub mod ensemble;
pub mod error;
pub mod features;
pub mod report;
pub mod rules;
pub mod scan;
pub mod schema;

#[cfg(test)]
mod testing;
