//! Rule-List-C: ripple-down exceptions to a default of clean.

use super::RuleList;

pub static RULE_LIST_C: RuleList = rule_list! {
    "rule-list-c":
    [DebugSize <= 14, ImageVersion <= 760, VirtualSize2 > 992, ExportSize <= 80.5] => dirty,
    [DebugSize <= 14, ImageVersion <= 4525, ExportSize <= 198.5, ResourceSize <= 7348, VirtualSize2 <= 6, ResourceSize > 1773] => dirty,
    [DebugSize <= 14, ImageVersion <= 4950, ExportSize <= 56, IatRva > 256, VirtualSize2 > 42, NumberOfSections > 3.5] => dirty,
    [DebugSize <= 14, ImageVersion <= 4950, VirtualSize2 <= 6, ResourceSize > 17302] => dirty,
    [DebugSize <= 14, NumberOfSections >= 2.5, ResourceSize <= 1776, IatRva <= 6144, ExportSize <= 219.5, VirtualSize2 > 2410, VirtualSize2 <= 61224] => dirty,
    [DebugSize <= 14, NumberOfSections >= 2.5, ExportSize <= 198, ResourceSize > 8, VirtualSize2 > 83, ResourceSize <= 976] => dirty,
    [DebugSize <= 14, NumberOfSections >= 2.5, ResourceSize > 1418, IatRva > 6144, VirtualSize2 <= 4] => dirty,
    [DebugSize <= 14, VirtualSize2 > 14, NumberOfSections > 4.5, ResourceSize > 1550, VirtualSize2 <= 2398] => dirty,
    [DebugSize <= 14, VirtualSize2 > 14, NumberOfSections > 4.5, ExportSize > 138.5, ImageVersion > 1005] => dirty,
    [ImageVersion <= 5005, DebugSize <= 14, VirtualSize2 > 14, NumberOfSections <= 4.5] => dirty,
    [ImageVersion <= 5005, DebugSize <= 14, ImageVersion <= 5, NumberOfSections > 3.5, ExportSize <= 164.5, IatRva <= 73728, ResourceSize <= 8722] => dirty,
    [ImageVersion <= 5005, DebugSize <= 14, ResourceSize > 21108, ResourceSize <= 37272, ImageVersion <= 760] => dirty,
    [NumberOfSections > 4.5, ExportSize <= 25.5, ImageVersion > 1505, ResourceSize <= 1020] => dirty,
    [ImageVersion <= 1500, NumberOfSections > 5.5, ExportSize <= 101, ResourceSize <= 3168] => dirty,
    [ImageVersion <= 3025, DebugSize <= 14, ResourceSize > 1182, VirtualSize2 > 164, ExportSize <= 330.5] => dirty,
    [ImageVersion <= 1010, ResourceSize > 2352, VirtualSize2 > 115254, VirtualSize2 <= 153258] => dirty,
    [ImageVersion <= 1500, NumberOfSections > 5.5, ImageVersion <= 500, ExportSize <= 164, IatRva <= 2048] => dirty,
    [ImageVersion <= 1010, ResourceSize <= 474, IatRva > 26624, VirtualSize2 > 1802, IatRva <= 221348] => dirty,
    [ImageVersion <= 2500, DebugSize <= 14, ResourceSize > 78678, ResourceSize <= 120928, NumberOfSections <= 4] => dirty,
    [ImageVersion <= 5005, ExportSize <= 25.5, NumberOfSections > 3.5, ResourceSize > 35814, VirtualSize2 > 215352] => dirty,
    [ImageVersion <= 500, IatRva <= 2560, NumberOfSections > 3.5, ResourceSize > 648, ResourceSize <= 62291] => dirty,
    [ExportSize <= 25.5, NumberOfSections > 4.5, VirtualSize2 > 50765, ResourceSize <= 741012, ResourceSize > 2512] => dirty,
    [ImageVersion <= 1010, ExportSize <= 25.5, VirtualSize2 <= 3278, VirtualSize2 > 1200, ResourceSize > 2032] => dirty,
    [ResourceSize <= 474, ExportSize <= 76, VirtualSize2 <= 1556, IatRva <= 2368] => dirty,
    [ImageVersion <= 1500, VirtualSize2 <= 6, IatRva > 2048] => dirty,
    _ => clean,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Classifier, Op, Verdict};
    use crate::schema::{Feature, FeatureVector};

    fn vector(values: [f64; 7]) -> FeatureVector {
        FeatureVector::try_from(values).unwrap()
    }

    #[test]
    fn shape() {
        assert_eq!(RULE_LIST_C.len(), 25);
        assert_eq!(RULE_LIST_C.default_verdict(), Verdict::Clean);
        assert!(RULE_LIST_C.rules().iter().all(|r| r.verdict == Verdict::Dirty));
    }

    #[test]
    fn keeps_greater_or_equal_conditions() {
        let ge = &RULE_LIST_C.rules()[4].conditions[1];
        assert_eq!(ge.feature, Feature::NumberOfSections);
        assert_eq!(ge.op, Op::Ge);
        assert_eq!(ge.threshold, 2.5);

        let v = vector([13.0, 1005.5, 2559.0, 82.0, 1182.5, 10682.5, 7.0]);
        assert_eq!(RULE_LIST_C.first_match(&v), Some(4));
        assert_eq!(RULE_LIST_C.classify(&v), Verdict::Dirty);
    }

    #[test]
    fn unmatched_vectors_are_clean() {
        let v = vector([100.0, 0.0, 8192.0, 0.0, 6000.0, 500.0, 2.0]);
        assert_eq!(RULE_LIST_C.first_match(&v), None);
        assert_eq!(RULE_LIST_C.classify(&v), Verdict::Clean);
    }

    #[test]
    fn exception_rule_order() {
        let v = vector([100.0, 600000.0, 4096.0, 0.0, 1000.0, 1000.0, 5.0]);
        assert_eq!(RULE_LIST_C.first_match(&v), Some(12));
    }
}
