//! Step 4: strip residual suffixes from long stems.

use crate::measure::measure;
use crate::rules::STEP4_SUFFIXES;
use crate::trace::{Rule, Trace};

/// (m>1) removal of the first suffix in [`STEP4_SUFFIXES`] order that the
/// word ends with. ION additionally needs the stem to end in S or T.
///
/// The first matching suffix settles the step: if its guard fails, later
/// candidates are not tried.
pub fn step_4(word: String, trace: &mut Trace) -> String {
    let found = STEP4_SUFFIXES
        .iter()
        .find_map(|&suffix| word.strip_suffix(suffix).map(|stem| (suffix, stem)));
    let Some((suffix, stem)) = found else {
        return word;
    };
    if measure(stem) <= 1 {
        return word;
    }
    if suffix == "ion" && !(stem.ends_with('s') || stem.ends_with('t')) {
        return word;
    }

    let after = stem.to_string();
    trace.record(&word, &after, Rule::Strip { suffix });
    after
}
