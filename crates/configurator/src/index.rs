//! Precomputed choice availability for repeated lookups.

use std::collections::HashSet;

use courtside_catalog::Variant;

use crate::selection::Selection;

/// Variants with more options than this are not expanded into the index
/// (2^n keys each) and are scanned instead.
const MAX_INDEXED_OPTIONS: usize = 10;

/// Option/choice pairs in option-name order.
type ChoiceKey = Vec<(String, String)>;

/// Set of every partial choice combination that some in-stock variant covers.
///
/// Answers exactly what
/// [`VariantResolver::is_choice_enabled`](crate::VariantResolver::is_choice_enabled)
/// answers, with one hash lookup per call instead of a variant scan.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityIndex {
    keys: HashSet<ChoiceKey>,
    unindexed: Vec<Variant>,
}

impl AvailabilityIndex {
    pub fn build(variants: &[Variant]) -> Self {
        let mut index = Self::default();

        for variant in variants.iter().filter(|v| v.stock.is_available()) {
            let pairs: Vec<(&str, &str)> = variant
                .choices
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();

            if pairs.len() > MAX_INDEXED_OPTIONS {
                index.unindexed.push(variant.clone());
                continue;
            }

            for mask in 1u32..(1u32 << pairs.len()) {
                let subset = pairs
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1u32 << *i) != 0)
                    .map(|(_, pair)| *pair);
                index.keys.insert(key_of(subset));
            }
        }

        tracing::debug!(
            keys = index.keys.len(),
            unindexed = index.unindexed.len(),
            "built availability index"
        );
        index
    }

    pub fn is_choice_enabled(&self, option: &str, choice: &str, selection: &Selection) -> bool {
        let candidate = selection.with(option, choice);
        self.keys.contains(&key_of(candidate.pairs()))
            || self
                .unindexed
                .iter()
                .any(|v| v.agrees_with(candidate.pairs()))
    }
}

/// Canonical key for pairs already sorted by option name.
fn key_of<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> ChoiceKey {
    pairs
        .map(|(option, choice)| (option.to_string(), choice.to_string()))
        .collect()
}
