//! Step 5: drop a final E and undouble a final LL.

use crate::measure::{cvc, measure};
use crate::trace::{Rule, Trace};

/// (m>1) E → '', (m=1 and not *o) E → '', (m>1 and *d and *L) LL → L.
pub fn step_5(word: String, trace: &mut Trace) -> String {
    if let Some(stem) = word.strip_suffix('e') {
        let m = measure(stem);
        let rule = if m > 1 {
            Rule::EToNull
        } else if m == 1 && !cvc(stem) {
            Rule::EToNullNotCvc
        } else {
            return word;
        };
        let after = stem.to_string();
        trace.record(&word, &after, rule);
        return after;
    }

    if word.ends_with("ll") && measure(&word) > 1 {
        let mut after = word.clone();
        after.pop();
        trace.record(&word, &after, Rule::LlToL);
        return after;
    }
    word
}
