//! Plain-text rendering of a stemming run.

use std::fmt;

use crate::stemmer::StemResult;

/// Numbered before/after listing of every rule that fired, then the stem.
pub struct Report<'a> {
    result: &'a StemResult,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a StemResult) -> Self {
        Self { result }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stemming process for '{}'", self.result.input)?;
        if self.result.trace.is_empty() {
            writeln!(
                f,
                "No rules applied. Word '{}' remains unchanged.",
                self.result.input
            )?;
        }
        for (i, entry) in self.result.trace.iter().enumerate() {
            writeln!(f, "Step {}: Rule {}", i + 1, entry.label)?;
            writeln!(f, "  Before: {} → After: {}", entry.before, entry.after)?;
        }
        write!(f, "Final stem: {}", self.result.stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stemmer::stem;

    #[test]
    fn test_report_lists_steps() {
        let result = stem("running");
        let text = Report::new(&result).to_string();
        assert_eq!(
            text,
            "Stemming process for 'running'\n\
             Step 1: Rule 1b: (v) ING → ''\n\
             \x20 Before: running → After: runn\n\
             Step 2: Rule 1b Post: double consonant → single letter\n\
             \x20 Before: runn → After: run\n\
             Final stem: run"
        );
    }

    #[test]
    fn test_report_without_rules() {
        let result = stem("cat");
        let text = Report::new(&result).to_string();
        assert!(text.contains("No rules applied. Word 'cat' remains unchanged."));
        assert!(text.ends_with("Final stem: cat"));
        assert!(!text.contains("Step 1:"));
    }
}
