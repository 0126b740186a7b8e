//! Fixed decision-rule classifiers.
//!
//! Each classifier is plain static data: either a binary [`DecisionTree`]
//! whose inner nodes test `feature <= threshold`, or an ordered [`RuleList`]
//! of conjunctive conditions with a default verdict. The `tree!` and
//! `rule_list!` macros below only build those values; nothing is decided in
//! generated control flow, so every structure can be walked, counted and
//! traced in tests.

use std::fmt;

use serde::Serialize;

use crate::schema::{Feature, FeatureVector};

/// One classifier's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Clean = 0,
    Dirty = 1,
}

impl Verdict {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Maps a feature vector to a verdict. Implementations must be pure.
pub trait Classifier: Send + Sync {
    fn name(&self) -> &'static str;

    fn classify(&self, vector: &FeatureVector) -> Verdict;
}

/// A decision tree node.
#[derive(Debug)]
pub enum Node {
    Leaf(Verdict),
    Split {
        feature: Feature,
        threshold: f64,
        /// Taken when `feature <= threshold`.
        le: &'static Node,
        gt: &'static Node,
    },
}

impl Node {
    fn split_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Split { le, gt, .. } => 1 + le.split_count() + gt.split_count(),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Split { le, gt, .. } => le.leaf_count() + gt.leaf_count(),
        }
    }
}

/// One test visited while walking a tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub feature: Feature,
    pub threshold: f64,
    /// Whether `feature <= threshold` held.
    pub le: bool,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = if self.le { "<=" } else { ">" };
        write!(f, "{}{}{}", self.feature, op, self.threshold)
    }
}

#[derive(Debug)]
pub struct DecisionTree {
    name: &'static str,
    root: Node,
}

impl DecisionTree {
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn split_count(&self) -> usize {
        self.root.split_count()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Walk the tree, recording every test on the way to the leaf.
    pub fn trace(&self, vector: &FeatureVector) -> (Verdict, Vec<Step>) {
        let mut steps = Vec::new();
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf(verdict) => return (*verdict, steps),
                Node::Split {
                    feature,
                    threshold,
                    le,
                    gt,
                } => {
                    let took_le = vector[*feature] <= *threshold;
                    steps.push(Step {
                        feature: *feature,
                        threshold: *threshold,
                        le: took_le,
                    });
                    node = if took_le { le } else { gt };
                }
            }
        }
    }
}

impl Classifier for DecisionTree {
    fn name(&self) -> &'static str {
        self.name
    }

    fn classify(&self, vector: &FeatureVector) -> Verdict {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf(verdict) => return *verdict,
                Node::Split {
                    feature,
                    threshold,
                    le,
                    gt,
                } => node = if vector[*feature] <= *threshold { le } else { gt },
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Le,
    Gt,
    Ge,
}

#[derive(Debug)]
pub struct Condition {
    pub feature: Feature,
    pub op: Op,
    pub threshold: f64,
}

impl Condition {
    pub fn holds(&self, vector: &FeatureVector) -> bool {
        let value = vector[self.feature];
        match self.op {
            Op::Le => value <= self.threshold,
            Op::Gt => value > self.threshold,
            Op::Ge => value >= self.threshold,
        }
    }
}

/// A conjunction of conditions and the verdict it yields.
#[derive(Debug)]
pub struct Rule {
    pub conditions: &'static [Condition],
    pub verdict: Verdict,
}

impl Rule {
    pub fn matches(&self, vector: &FeatureVector) -> bool {
        self.conditions.iter().all(|c| c.holds(vector))
    }
}

/// Ordered rules; the first match wins, otherwise `default`.
#[derive(Debug)]
pub struct RuleList {
    name: &'static str,
    rules: &'static [Rule],
    default: Verdict,
}

impl RuleList {
    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    pub fn default_verdict(&self) -> Verdict {
        self.default
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Index of the first rule that fires, `None` if the default applies.
    pub fn first_match(&self, vector: &FeatureVector) -> Option<usize> {
        self.rules.iter().position(|r| r.matches(vector))
    }
}

impl Classifier for RuleList {
    fn name(&self) -> &'static str {
        self.name
    }

    fn classify(&self, vector: &FeatureVector) -> Verdict {
        match self.first_match(vector) {
            Some(i) => self.rules[i].verdict,
            None => self.default,
        }
    }
}

macro_rules! verdict {
    (clean) => {
        $crate::rules::Verdict::Clean
    };
    (dirty) => {
        $crate::rules::Verdict::Dirty
    };
}

macro_rules! op {
    (<=) => {
        $crate::rules::Op::Le
    };
    (>) => {
        $crate::rules::Op::Gt
    };
    (>=) => {
        $crate::rules::Op::Ge
    };
}

/// Builds a [`Node`] from nested `if Feature <= threshold { .. } else { .. }`
/// blocks ending in `clean` / `dirty` leaves.
macro_rules! tree {
    (clean) => {
        $crate::rules::Node::Leaf(verdict!(clean))
    };
    (dirty) => {
        $crate::rules::Node::Leaf(verdict!(dirty))
    };
    (if $feature:ident <= $threshold:literal { $($le:tt)* } else { $($gt:tt)* }) => {
        $crate::rules::Node::Split {
            feature: $crate::schema::Feature::$feature,
            threshold: $threshold as f64,
            le: &tree!($($le)*),
            gt: &tree!($($gt)*),
        }
    };
}

/// Builds a [`RuleList`] from `[Feature op threshold, ..] => verdict,` lines
/// and a final `_ => verdict`.
macro_rules! rule_list {
    ($name:literal: $( [ $($feature:ident $op:tt $threshold:literal),+ ] => $verdict:ident, )* _ => $default:ident $(,)?) => {
        $crate::rules::RuleList {
            name: $name,
            rules: &[ $(
                $crate::rules::Rule {
                    conditions: &[ $(
                        $crate::rules::Condition {
                            feature: $crate::schema::Feature::$feature,
                            op: op!($op),
                            threshold: $threshold as f64,
                        }
                    ),+ ],
                    verdict: verdict!($verdict),
                }
            ),* ],
            default: verdict!($default),
        }
    };
}

mod rule_list_b;
mod rule_list_c;
mod tree_a;
mod tree_a_grafted;

pub use rule_list_b::RULE_LIST_B;
pub use rule_list_c::RULE_LIST_C;
pub use tree_a::TREE_A;
pub use tree_a_grafted::TREE_A_GRAFTED;
