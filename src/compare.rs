//! Keyword set comparison between two pages.

use std::collections::BTreeSet;

use crate::result::{ComparisonRecord, KeywordProfile};

/// Compare the keyword sets of two profiles. Counts are ignored.
#[must_use]
pub fn compare_keywords(own: &KeywordProfile, other: &KeywordProfile) -> ComparisonRecord {
    let own_set = own.keyword_set();
    let other_set = other.keyword_set();

    ComparisonRecord {
        shared: to_owned_set(own_set.intersection(&other_set)),
        unique_to_self: to_owned_set(own_set.difference(&other_set)),
        unique_to_competitor: to_owned_set(other_set.difference(&own_set)),
    }
}

fn to_owned_set<'a, 'b: 'a>(words: impl Iterator<Item = &'a &'b str>) -> BTreeSet<String> {
    words.map(|w| (*w).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(words: &[&str]) -> KeywordProfile {
        KeywordProfile::from_counts(words.iter().map(|w| (*w, 1)))
    }

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn partitions_keywords() {
        let cmp = compare_keywords(&profile(&["a", "b"]), &profile(&["b", "c"]));
        assert_eq!(cmp.shared, set(&["b"]));
        assert_eq!(cmp.unique_to_self, set(&["a"]));
        assert_eq!(cmp.unique_to_competitor, set(&["c"]));
    }

    #[test]
    fn counts_do_not_matter() {
        let own = KeywordProfile::from_counts([("seo", 9), ("web", 1)]);
        let other = KeywordProfile::from_counts([("web", 5), ("seo", 1)]);
        let cmp = compare_keywords(&own, &other);
        assert_eq!(cmp.shared, set(&["seo", "web"]));
        assert!(cmp.unique_to_self.is_empty());
        assert!(cmp.unique_to_competitor.is_empty());
    }

    #[test]
    fn empty_profiles_compare_empty() {
        let cmp = compare_keywords(&KeywordProfile::default(), &KeywordProfile::default());
        assert_eq!(cmp, ComparisonRecord::default());
    }
}
