//! Suffix tables for steps 2, 3 and 4.

use crate::measure::measure;
use crate::trace::{Rule, Step, Trace};

/// Step 2 suffix → replacement, in declaration order.
pub const STEP2_RULES: [(&str, &str); 20] = [
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

/// Step 3 suffix → replacement, in declaration order.
pub const STEP3_RULES: [(&str, &str); 7] = [
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Step 4 candidates. Tried in this exact order, not by length.
pub const STEP4_SUFFIXES: [&str; 19] = [
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Suffix replacement table, longest suffix first.
#[derive(Debug, Clone)]
pub struct RuleTable {
    step: Step,
    entries: Vec<(&'static str, &'static str)>,
}

impl RuleTable {
    /// Sort `rules` by descending suffix length. Equal lengths keep their
    /// declaration order.
    pub fn new(step: Step, rules: &[(&'static str, &'static str)]) -> Self {
        let mut entries = rules.to_vec();
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { step, entries }
    }

    pub fn step2() -> Self {
        Self::new(Step::Step2, &STEP2_RULES)
    }

    pub fn step3() -> Self {
        Self::new(Step::Step3, &STEP3_RULES)
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Entries in the order they are tried.
    pub fn entries(&self) -> &[(&'static str, &'static str)] {
        &self.entries
    }

    /// Replace the longest matching suffix when its stem has `m > 0`.
    ///
    /// Only the longest matching suffix is tested. If its stem fails the
    /// measure guard the word is returned unchanged, even when a shorter
    /// suffix would have passed.
    pub fn apply(&self, word: String, trace: &mut Trace) -> String {
        let found = self.entries.iter().find_map(|&(suffix, replacement)| {
            word.strip_suffix(suffix)
                .map(|stem| (suffix, replacement, stem))
        });
        let Some((suffix, replacement, stem)) = found else {
            return word;
        };
        if measure(stem) == 0 {
            return word;
        }

        let after = format!("{}{}", stem, replacement);
        trace.record(
            &word,
            &after,
            Rule::Replace {
                step: self.step,
                suffix,
                replacement,
            },
        );
        after
    }
}
