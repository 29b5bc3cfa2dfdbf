//! Step 1: plurals, past participles and terminal y.

use crate::measure::{contains_vowel, cvc, ends_double_consonant, measure};
use crate::trace::{Rule, Trace};

/// 1a: SSES → SS, IES → I, SS → SS, S → ''. First match wins.
pub fn step_1a(word: String, trace: &mut Trace) -> String {
    let (after, rule) = if let Some(stem) = word.strip_suffix("sses") {
        (format!("{}ss", stem), Rule::SsesToSs)
    } else if let Some(stem) = word.strip_suffix("ies") {
        (format!("{}i", stem), Rule::IesToI)
    } else if word.ends_with("ss") {
        return word;
    } else if let Some(stem) = word.strip_suffix('s') {
        (stem.to_string(), Rule::SToNull)
    } else {
        return word;
    };
    trace.record(&word, &after, rule);
    after
}

/// 1b: (m>0) EED → EE, (*v*) ED → '', (*v*) ING → ''.
///
/// Removing ED or ING runs [`step_1b_post`] on the result. A word ending in
/// EED whose stem fails the guard is not retried as ED.
pub fn step_1b(word: String, trace: &mut Trace) -> String {
    if let Some(stem) = word.strip_suffix("eed") {
        if measure(stem) == 0 {
            return word;
        }
        let after = format!("{}ee", stem);
        trace.record(&word, &after, Rule::EedToEe);
        return after;
    }

    let (stem, rule) = if let Some(stem) = word.strip_suffix("ed") {
        (stem, Rule::EdToNull)
    } else if let Some(stem) = word.strip_suffix("ing") {
        (stem, Rule::IngToNull)
    } else {
        return word;
    };
    if !contains_vowel(stem) {
        return word;
    }

    let after = stem.to_string();
    trace.record(&word, &after, rule);
    step_1b_post(after, trace)
}

/// Cleanup after ED/ING removal: AT → ATE, BL → BLE, IZ → IZE, undouble a
/// final consonant other than l/s/z, or add E to a short CVC stem.
pub fn step_1b_post(word: String, trace: &mut Trace) -> String {
    let (after, rule) = if word.ends_with("at") {
        (format!("{}e", word), Rule::AtToAte)
    } else if word.ends_with("bl") {
        (format!("{}e", word), Rule::BlToBle)
    } else if word.ends_with("iz") {
        (format!("{}e", word), Rule::IzToIze)
    } else if ends_double_consonant(&word)
        && !matches!(word.chars().last(), Some('l' | 's' | 'z'))
    {
        let mut single = word.clone();
        single.pop();
        (single, Rule::DoubleToSingle)
    } else if measure(&word) == 1 && cvc(&word) {
        (format!("{}e", word), Rule::CvcAddE)
    } else {
        return word;
    };
    trace.record(&word, &after, rule);
    after
}

/// 1c: (*v*) Y → I.
pub fn step_1c(word: String, trace: &mut Trace) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        if contains_vowel(stem) {
            let after = format!("{}i", stem);
            trace.record(&word, &after, Rule::YToI);
            return after;
        }
    }
    word
}
