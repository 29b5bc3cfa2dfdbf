//! Stemtrace Porter — rule-based English stemming with a per-rule trace.

pub mod catalog;
pub mod measure;
pub mod report;
pub mod rules;
pub mod stemmer;
pub mod steps;
pub mod trace;

pub use catalog::{rule_catalog, rules_for_step, RuleInfo};
pub use report::Report;
pub use stemmer::{stem, PorterStemmer, StemResult};
pub use trace::{Rule, Step, Trace, TraceEntry};
