//! Ensemble scoring over the four rule classifiers.

use serde::Serialize;
use tracing::debug;

use crate::features::ExtractionResult;
use crate::rules::{Classifier, RULE_LIST_B, RULE_LIST_C, TREE_A, TREE_A_GRAFTED, Verdict};
use crate::schema::FeatureVector;

/// Score given to any sample whose features could not be extracted.
/// Unparseable input is treated as maximally suspicious, never as unscored.
pub const FAIL_SAFE_SCORE: f32 = 1.0;

/// One member's verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Vote {
    pub classifier: &'static str,
    pub verdict: Verdict,
}

/// Four classifiers whose verdicts are averaged into a score in `[0, 1]`.
pub struct Ensemble<'a> {
    members: [&'a dyn Classifier; 4],
}

impl Ensemble<'static> {
    /// Tree-A, Tree-A-Grafted, Rule-List-B and Rule-List-C.
    pub fn standard() -> Self {
        Self::new([&TREE_A, &TREE_A_GRAFTED, &RULE_LIST_B, &RULE_LIST_C])
    }
}

impl Default for Ensemble<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> Ensemble<'a> {
    pub fn new(members: [&'a dyn Classifier; 4]) -> Self {
        Self { members }
    }

    pub fn member_names(&self) -> [&'static str; 4] {
        self.members.map(|m| m.name())
    }

    /// Every member's verdict, in member order.
    pub fn votes(&self, vector: &FeatureVector) -> [Vote; 4] {
        self.members.map(|m| Vote {
            classifier: m.name(),
            verdict: m.classify(vector),
        })
    }

    /// Mean of the four verdicts: one of 0.0, 0.25, 0.5, 0.75 or 1.0.
    pub fn score_vector(&self, vector: &FeatureVector) -> f32 {
        let dirty: u8 = self.votes(vector).iter().map(|v| v.verdict.as_u8()).sum();
        f32::from(dirty) / self.members.len() as f32
    }

    /// Score one extraction. Failed extractions get [`FAIL_SAFE_SCORE`]
    /// without consulting any classifier.
    pub fn score(&self, extraction: &ExtractionResult) -> f32 {
        let Some(vector) = extraction.vector() else {
            return FAIL_SAFE_SCORE;
        };
        let score = self.score_vector(vector);
        debug!(score, "scored feature vector");
        score
    }
}
