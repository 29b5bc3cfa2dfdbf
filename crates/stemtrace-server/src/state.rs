//! Shared application state.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use serde::Serialize;
use stemtrace_core::{Result, StemtraceConfig};
use stemtrace_porter::{PorterStemmer, StemResult};
use tracing::debug;

/// Running counters exposed by `GET /api/stats`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StemStats {
    pub words_stemmed: u64,
    pub unchanged_words: u64,
    pub batches: u64,
    /// Rule firings keyed by step name ("1a", "2", ...).
    pub rules_by_step: BTreeMap<String, u64>,
}

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: StemtraceConfig,
    pub stemmer: PorterStemmer,
    pub stats: RwLock<StemStats>,
}

impl AppState {
    pub fn new(config: StemtraceConfig) -> Self {
        Self {
            config,
            stemmer: PorterStemmer::new(),
            stats: RwLock::new(StemStats::default()),
        }
    }

    /// Stem one word after checking it against the configured limits.
    pub fn stem(&self, word: &str) -> Result<StemResult> {
        self.config.check_word(word)?;
        let result = self.stemmer.stem(word);
        self.record(std::slice::from_ref(&result));
        Ok(result)
    }

    /// Stem every word, or none if any word or the batch size is over limit.
    pub fn stem_batch(&self, words: &[String]) -> Result<Vec<StemResult>> {
        self.config.check_batch(words.len())?;
        for word in words {
            self.config.check_word(word)?;
        }

        let results: Vec<StemResult> = words.iter().map(|w| self.stemmer.stem(w)).collect();
        self.record(&results);
        self.stats.write().batches += 1;
        debug!(words = results.len(), "stemmed batch");
        Ok(results)
    }

    pub fn snapshot(&self) -> StemStats {
        self.stats.read().clone()
    }

    fn record(&self, results: &[StemResult]) {
        let mut stats = self.stats.write();
        for result in results {
            stats.words_stemmed += 1;
            if result.is_unchanged() {
                stats.unchanged_words += 1;
            }
            for entry in &result.trace {
                *stats
                    .rules_by_step
                    .entry(entry.step.to_string())
                    .or_insert(0) += 1;
            }
        }
    }
}
