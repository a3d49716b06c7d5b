//! Best-practice evaluation of extracted elements.

use std::ops::RangeInclusive;

use crate::options::Options;
use crate::result::{ElementRecord, EvaluationRecord};

/// Evaluate elements against the default ranges (title 30–60, meta 80–160).
#[must_use]
pub fn evaluate_elements(elements: &ElementRecord) -> EvaluationRecord {
    let options = Options::default();
    evaluate_with_ranges(elements, &options.title_range, &options.meta_range)
}

/// Evaluate elements against custom inclusive length ranges.
///
/// Lengths are counted in characters, not bytes.
#[must_use]
pub fn evaluate_with_ranges(
    elements: &ElementRecord,
    title_range: &RangeInclusive<usize>,
    meta_range: &RangeInclusive<usize>,
) -> EvaluationRecord {
    let title_length = char_len(&elements.title);
    let meta_length = char_len(&elements.meta_description);

    EvaluationRecord {
        title_length,
        title_ok: title_range.contains(&title_length),
        meta_length,
        meta_ok: meta_range.contains(&meta_length),
        has_h1: !elements.h1.is_empty(),
    }
}

#[inline]
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_title_len(n: usize) -> ElementRecord {
        ElementRecord {
            title: "x".repeat(n),
            ..ElementRecord::default()
        }
    }

    #[test]
    fn title_boundaries_are_inclusive() {
        assert!(!evaluate_elements(&with_title_len(29)).title_ok);
        assert!(evaluate_elements(&with_title_len(30)).title_ok);
        assert!(evaluate_elements(&with_title_len(60)).title_ok);
        assert!(!evaluate_elements(&with_title_len(61)).title_ok);
    }

    #[test]
    fn meta_boundaries_are_inclusive() {
        let meta = |n: usize| ElementRecord {
            meta_description: "m".repeat(n),
            ..ElementRecord::default()
        };
        assert!(!evaluate_elements(&meta(79)).meta_ok);
        assert!(evaluate_elements(&meta(80)).meta_ok);
        assert!(evaluate_elements(&meta(160)).meta_ok);
        assert!(!evaluate_elements(&meta(161)).meta_ok);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let elements = ElementRecord {
            title: "é".repeat(30),
            ..ElementRecord::default()
        };
        let eval = evaluate_elements(&elements);
        assert_eq!(eval.title_length, 30);
        assert!(eval.title_ok);
    }

    #[test]
    fn empty_record_fails_every_check() {
        let eval = evaluate_elements(&ElementRecord::default());
        assert_eq!(eval, EvaluationRecord::default());
    }

    #[test]
    fn custom_ranges_apply() {
        let eval = evaluate_with_ranges(&with_title_len(10), &(5..=10), &(0..=0));
        assert!(eval.title_ok);
        assert!(eval.meta_ok);
    }
}
