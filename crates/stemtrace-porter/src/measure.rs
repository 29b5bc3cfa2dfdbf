//! Phonetic heuristics that gate every rule.
//!
//! Two vowel sets are in play. [`contains_vowel`] and [`measure`] treat `y`
//! as a vowel; [`ends_double_consonant`] and [`cvc`] do not.

/// Vowel for `contains_vowel` and `measure`: a, e, i, o, u, y.
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Vowel for `ends_double_consonant` and `cvc`: a, e, i, o, u.
fn is_strict_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

pub fn contains_vowel(s: &str) -> bool {
    s.chars().any(is_vowel)
}

/// Count of vowel-run → consonant-run transitions, scanning left to right.
///
/// `[C](VC)^m[V]` gives `m`: "tree" is 0, "trouble" is 1, "oaten" is 2.
pub fn measure(s: &str) -> usize {
    let mut m = 0;
    let mut in_vowel_run = false;
    for c in s.chars() {
        if is_vowel(c) {
            in_vowel_run = true;
        } else if in_vowel_run {
            // first consonant after a vowel run closes one VC pair
            m += 1;
            in_vowel_run = false;
        }
    }
    m
}

/// Last two characters equal and not in a, e, i, o, u.
pub fn ends_double_consonant(s: &str) -> bool {
    let mut tail = s.chars().rev();
    match (tail.next(), tail.next()) {
        (Some(last), Some(prev)) => last == prev && !is_strict_vowel(last),
        _ => false,
    }
}

/// Ends consonant-vowel-consonant where the final consonant is not w, x or y.
pub fn cvc(s: &str) -> bool {
    let mut tail = s.chars().rev();
    match (tail.next(), tail.next(), tail.next()) {
        (Some(c2), Some(v), Some(c1)) => {
            !is_strict_vowel(c1)
                && is_strict_vowel(v)
                && !is_strict_vowel(c2)
                && !matches!(c2, 'w' | 'x' | 'y')
        }
        _ => false,
    }
}
