//! Step trace: which rule fired at each phase, with the word before and after.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the ordered rule groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Step {
    #[serde(rename = "1a")]
    Step1a,
    #[serde(rename = "1b")]
    Step1b,
    #[serde(rename = "1b-post")]
    Step1bPost,
    #[serde(rename = "1c")]
    Step1c,
    #[serde(rename = "2")]
    Step2,
    #[serde(rename = "3")]
    Step3,
    #[serde(rename = "4")]
    Step4,
    #[serde(rename = "5")]
    Step5,
}

impl Step {
    /// All steps in application order.
    pub const ALL: [Step; 8] = [
        Step::Step1a,
        Step::Step1b,
        Step::Step1bPost,
        Step::Step1c,
        Step::Step2,
        Step::Step3,
        Step::Step4,
        Step::Step5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Step1a => "1a",
            Step::Step1b => "1b",
            Step::Step1bPost => "1b-post",
            Step::Step1c => "1c",
            Step::Step2 => "2",
            Step::Step3 => "3",
            Step::Step4 => "4",
            Step::Step5 => "5",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Step::ALL
            .into_iter()
            .find(|step| step.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown step: {}", s))
    }
}

/// A rule that changed the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    SsesToSs,
    IesToI,
    SToNull,
    EedToEe,
    EdToNull,
    IngToNull,
    AtToAte,
    BlToBle,
    IzToIze,
    DoubleToSingle,
    CvcAddE,
    YToI,
    /// Table replacement in step 2 or 3.
    Replace {
        step: Step,
        suffix: &'static str,
        replacement: &'static str,
    },
    /// Step 4 suffix removal.
    Strip { suffix: &'static str },
    EToNull,
    EToNullNotCvc,
    LlToL,
}

impl Rule {
    pub fn step(&self) -> Step {
        match self {
            Rule::SsesToSs | Rule::IesToI | Rule::SToNull => Step::Step1a,
            Rule::EedToEe | Rule::EdToNull | Rule::IngToNull => Step::Step1b,
            Rule::AtToAte
            | Rule::BlToBle
            | Rule::IzToIze
            | Rule::DoubleToSingle
            | Rule::CvcAddE => Step::Step1bPost,
            Rule::YToI => Step::Step1c,
            Rule::Replace { step, .. } => *step,
            Rule::Strip { .. } => Step::Step4,
            Rule::EToNull | Rule::EToNullNotCvc | Rule::LlToL => Step::Step5,
        }
    }

    /// Human-readable label, e.g. `2: (m>0) ATIONAL → ATE`.
    pub fn label(&self) -> String {
        match self {
            Rule::SsesToSs => "1a: SSES → SS".into(),
            Rule::IesToI => "1a: IES → I".into(),
            Rule::SToNull => "1a: S → ''".into(),
            Rule::EedToEe => "1b: (m>0) EED → EE".into(),
            Rule::EdToNull => "1b: (v) ED → ''".into(),
            Rule::IngToNull => "1b: (v) ING → ''".into(),
            Rule::AtToAte => "1b Post: AT → ATE".into(),
            Rule::BlToBle => "1b Post: BL → BLE".into(),
            Rule::IzToIze => "1b Post: IZ → IZE".into(),
            Rule::DoubleToSingle => "1b Post: double consonant → single letter".into(),
            Rule::CvcAddE => "1b Post: CVC and m=1 → add E".into(),
            Rule::YToI => "1c: (v) Y → I".into(),
            Rule::Replace {
                step,
                suffix,
                replacement,
            } => {
                let replacement = if replacement.is_empty() {
                    "(null)".to_string()
                } else {
                    replacement.to_ascii_uppercase()
                };
                format!(
                    "{}: (m>0) {} → {}",
                    step,
                    suffix.to_ascii_uppercase(),
                    replacement
                )
            }
            Rule::Strip { suffix: "ion" } => "4: (m>1 & *S/*T) ION → ''".into(),
            Rule::Strip { suffix } => format!("4: (m>1) {} → ''", suffix.to_ascii_uppercase()),
            Rule::EToNull => "5: (m>1) E → ''".into(),
            Rule::EToNullNotCvc => "5: (m=1 and not CVC) E → ''".into(),
            Rule::LlToL => "5: (m>1 and *L) LL → L".into(),
        }
    }

    /// Guard in the classic notation: `m` measure, `*v*` contains a vowel,
    /// `*d` double consonant, `*o` CVC, `*S` ends in S.
    pub fn condition(&self) -> &'static str {
        match self {
            Rule::SsesToSs | Rule::IesToI | Rule::SToNull => "",
            Rule::EedToEe => "m>0",
            Rule::EdToNull | Rule::IngToNull | Rule::YToI => "*v*",
            Rule::AtToAte | Rule::BlToBle | Rule::IzToIze => "",
            Rule::DoubleToSingle => "*d and not (*L or *S or *Z)",
            Rule::CvcAddE => "m=1 and *o",
            Rule::Replace { .. } => "m>0",
            Rule::Strip { suffix: "ion" } => "m>1 and (*S or *T)",
            Rule::Strip { .. } => "m>1",
            Rule::EToNull => "m>1",
            Rule::EToNullNotCvc => "m=1 and not *o",
            Rule::LlToL => "m>1 and *d and *L",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A single rule firing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub before: String,
    pub after: String,
    pub step: Step,
    pub label: String,
}

/// Append-only list of rule firings in the order they happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, before: &str, after: &str, rule: Rule) {
        self.entries.push(TraceEntry {
            before: before.to_string(),
            after: after.to_string(),
            step: rule.step(),
            label: rule.label(),
        });
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in firing order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn into_entries(self) -> Vec<TraceEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEntry;
    type IntoIter = std::slice::Iter<'a, TraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
