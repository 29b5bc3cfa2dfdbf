//! The full pipeline: lowercase, then 1a → 1b → 1c → 2 → 3 → 4 → 5.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rules::RuleTable;
use crate::steps;
use crate::trace::{Step, Trace, TraceEntry};

static DEFAULT_STEMMER: Lazy<PorterStemmer> = Lazy::new(PorterStemmer::new);

/// Stem `word` with the shared default stemmer.
///
/// ```
/// use stemtrace_porter::stem;
///
/// let result = stem("Caresses");
/// assert_eq!(result.stem, "caress");
/// assert_eq!(result.trace.len(), 1);
/// ```
pub fn stem(word: &str) -> StemResult {
    DEFAULT_STEMMER.stem(word)
}

/// Outcome of one stemming run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemResult {
    /// Lowercased input.
    pub input: String,
    /// Every rule that fired, in order.
    pub trace: Trace,
    /// Final stem.
    pub stem: String,
}

impl StemResult {
    /// True when no rule fired.
    pub fn is_unchanged(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn into_parts(self) -> (Vec<TraceEntry>, String) {
        (self.trace.into_entries(), self.stem)
    }
}

/// Porter stemmer with its replacement tables sorted once up front.
#[derive(Debug, Clone)]
pub struct PorterStemmer {
    step2: RuleTable,
    step3: RuleTable,
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl PorterStemmer {
    pub fn new() -> Self {
        Self {
            step2: RuleTable::step2(),
            step3: RuleTable::step3(),
        }
    }

    pub fn step2_table(&self) -> &RuleTable {
        &self.step2
    }

    pub fn step3_table(&self) -> &RuleTable {
        &self.step3
    }

    pub fn stem(&self, word: &str) -> StemResult {
        let input = word.to_lowercase();
        let mut trace = Trace::new();

        let mut current = input.clone();
        for step in PIPELINE {
            current = self.run_step(step, current, &mut trace);
        }

        debug!(input = %input, stem = %current, rules = trace.len(), "stemmed");
        StemResult {
            input,
            trace,
            stem: current,
        }
    }

    /// Run a single phase on an already-lowercased word.
    ///
    /// `Step1b` includes its post-processing; `Step1bPost` runs the
    /// post-processing alone.
    pub fn run_step(&self, step: Step, word: String, trace: &mut Trace) -> String {
        match step {
            Step::Step1a => steps::step_1a(word, trace),
            Step::Step1b => steps::step_1b(word, trace),
            Step::Step1bPost => steps::step_1b_post(word, trace),
            Step::Step1c => steps::step_1c(word, trace),
            Step::Step2 => self.step2.apply(word, trace),
            Step::Step3 => self.step3.apply(word, trace),
            Step::Step4 => steps::step_4(word, trace),
            Step::Step5 => steps::step_5(word, trace),
        }
    }
}

/// Phases in application order. Post-processing is reached through 1b.
const PIPELINE: [Step; 7] = [
    Step::Step1a,
    Step::Step1b,
    Step::Step1c,
    Step::Step2,
    Step::Step3,
    Step::Step4,
    Step::Step5,
];
