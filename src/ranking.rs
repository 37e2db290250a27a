//! Top-N selection over parsed entries.

use crate::model::SupportEntry;
use std::cmp::Reverse;

/// Return the `count` entries with the longest support periods, descending.
///
/// `count` is clamped to `[0, entries.len()]`: zero or negative yields an
/// empty result, an over-large count yields every entry. The sort is stable,
/// so entries with equal support periods keep their catalog encounter order.
/// The input slice is left untouched.
#[must_use]
pub fn select_top(entries: &[SupportEntry], count: i64) -> Vec<SupportEntry> {
    if count <= 0 {
        return Vec::new();
    }
    let take = usize::try_from(count).map_or(entries.len(), |n| n.min(entries.len()));

    let mut ranked = entries.to_vec();
    ranked.sort_by_key(|entry| Reverse(entry.support_days));
    ranked.truncate(take);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, days: i64) -> SupportEntry {
        SupportEntry::new(name.to_string(), "1".to_string(), days)
    }

    fn sample() -> Vec<SupportEntry> {
        vec![
            entry("short", 100),
            entry("long", 900),
            entry("medium", 500),
        ]
    }

    #[test]
    fn selects_longest_first() {
        let top = select_top(&sample(), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "long");
        assert_eq!(top[1].name, "medium");
    }

    #[test]
    fn count_beyond_len_returns_all_sorted() {
        let entries = sample();
        let top = select_top(&entries, 99);
        assert_eq!(top.len(), entries.len());
        assert_eq!(top[0].name, "long");
        assert_eq!(top[2].name, "short");
    }

    #[test]
    fn zero_and_negative_counts_are_empty() {
        assert!(select_top(&sample(), 0).is_empty());
        assert!(select_top(&sample(), -3).is_empty());
    }

    #[test]
    fn input_is_not_mutated() {
        let entries = sample();
        let _ = select_top(&entries, 2);
        assert_eq!(entries[0].name, "short");
    }

    #[test]
    fn ties_keep_encounter_order() {
        let entries = vec![entry("first", 500), entry("second", 500), entry("third", 500)];
        let top = select_top(&entries, 3);
        assert_eq!(top[0].name, "first");
        assert_eq!(top[1].name, "second");
        assert_eq!(top[2].name, "third");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(select_top(&[], 5).is_empty());
    }
}
