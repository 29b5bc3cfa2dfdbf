//! Reference list of every rule, with a worked example for each.

use serde::Serialize;

use crate::trace::{Rule, Step};

/// A rule as shown in the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleInfo {
    pub step: Step,
    pub label: String,
    pub condition: &'static str,
    pub example_before: &'static str,
    pub example_after: &'static str,
}

const fn replace2(suffix: &'static str, replacement: &'static str) -> Rule {
    Rule::Replace {
        step: Step::Step2,
        suffix,
        replacement,
    }
}

const fn replace3(suffix: &'static str, replacement: &'static str) -> Rule {
    Rule::Replace {
        step: Step::Step3,
        suffix,
        replacement,
    }
}

const fn strip(suffix: &'static str) -> Rule {
    Rule::Strip { suffix }
}

// Examples hold for the single phase they document, not the full pipeline.
static CATALOG: [(Rule, &str, &str); 61] = [
    (Rule::SsesToSs, "caresses", "caress"),
    (Rule::IesToI, "ponies", "poni"),
    (Rule::SToNull, "cats", "cat"),
    (Rule::EedToEe, "agreed", "agree"),
    (Rule::EdToNull, "plastered", "plaster"),
    (Rule::IngToNull, "motoring", "motor"),
    (Rule::AtToAte, "conflat", "conflate"),
    (Rule::BlToBle, "troubl", "trouble"),
    (Rule::IzToIze, "siz", "size"),
    (Rule::DoubleToSingle, "hopp", "hop"),
    (Rule::CvcAddE, "fil", "file"),
    (Rule::YToI, "happy", "happi"),
    (replace2("ational", "ate"), "relational", "relate"),
    (replace2("tional", "tion"), "conditional", "condition"),
    (replace2("enci", "ence"), "valenci", "valence"),
    (replace2("anci", "ance"), "hesitanci", "hesitance"),
    (replace2("izer", "ize"), "digitizer", "digitize"),
    (replace2("abli", "able"), "conformabli", "conformable"),
    (replace2("alli", "al"), "radicalli", "radical"),
    (replace2("entli", "ent"), "differentli", "different"),
    (replace2("eli", "e"), "vileli", "vile"),
    (replace2("ousli", "ous"), "analogousli", "analogous"),
    (replace2("ization", "ize"), "vietnamization", "vietnamize"),
    (replace2("ation", "ate"), "predication", "predicate"),
    (replace2("ator", "ate"), "operator", "operate"),
    (replace2("alism", "al"), "feudalism", "feudal"),
    (replace2("iveness", "ive"), "decisiveness", "decisive"),
    (replace2("fulness", "ful"), "hopefulness", "hopeful"),
    (replace2("ousness", "ous"), "callousness", "callous"),
    (replace2("aliti", "al"), "formaliti", "formal"),
    (replace2("iviti", "ive"), "sensitiviti", "sensitive"),
    (replace2("biliti", "ble"), "sensibiliti", "sensible"),
    (replace3("icate", "ic"), "triplicate", "triplic"),
    (replace3("ative", ""), "formative", "form"),
    (replace3("alize", "al"), "formalize", "formal"),
    (replace3("iciti", "ic"), "electriciti", "electric"),
    (replace3("ical", "ic"), "electrical", "electric"),
    (replace3("ful", ""), "hopeful", "hope"),
    (replace3("ness", ""), "goodness", "good"),
    (strip("al"), "revival", "reviv"),
    (strip("ance"), "allowance", "allow"),
    (strip("ence"), "inference", "infer"),
    (strip("er"), "airliner", "airlin"),
    (strip("ic"), "gyroscopic", "gyroscop"),
    (strip("able"), "adjustable", "adjust"),
    (strip("ible"), "defensible", "defens"),
    (strip("ant"), "irritant", "irrit"),
    (strip("ement"), "replacement", "replac"),
    (strip("ment"), "adjustment", "adjust"),
    (strip("ent"), "dependent", "depend"),
    (strip("ion"), "adoption", "adopt"),
    (strip("ou"), "homologou", "homolog"),
    (strip("ism"), "communism", "commun"),
    (strip("ate"), "activate", "activ"),
    (strip("iti"), "angulariti", "angular"),
    (strip("ous"), "homologous", "homolog"),
    (strip("ive"), "effective", "effect"),
    (strip("ize"), "bowdlerize", "bowdler"),
    (Rule::EToNull, "probate", "probat"),
    (Rule::EToNullNotCvc, "cease", "ceas"),
    (Rule::LlToL, "controll", "control"),
];

/// Every rule in application order.
pub fn rule_catalog() -> Vec<RuleInfo> {
    CATALOG
        .iter()
        .map(|&(rule, before, after)| RuleInfo {
            step: rule.step(),
            label: rule.label(),
            condition: rule.condition(),
            example_before: before,
            example_after: after,
        })
        .collect()
}

/// Catalog entries for one step.
pub fn rules_for_step(step: Step) -> Vec<RuleInfo> {
    rule_catalog()
        .into_iter()
        .filter(|info| info.step == step)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{STEP2_RULES, STEP3_RULES, STEP4_SUFFIXES};
    use crate::stemmer::PorterStemmer;
    use crate::trace::Trace;

    #[test]
    fn test_every_example_fires_its_rule() {
        let stemmer = PorterStemmer::new();
        for info in rule_catalog() {
            let mut trace = Trace::new();
            let out = stemmer.run_step(info.step, info.example_before.to_string(), &mut trace);
            assert_eq!(out, info.example_after, "{}", info.label);
            assert_eq!(trace.labels(), vec![info.label.as_str()], "{}", info.example_before);
        }
    }

    #[test]
    fn test_covers_every_table_entry() {
        assert_eq!(rules_for_step(Step::Step2).len(), STEP2_RULES.len());
        assert_eq!(rules_for_step(Step::Step3).len(), STEP3_RULES.len());
        assert_eq!(rules_for_step(Step::Step4).len(), STEP4_SUFFIXES.len());
        assert_eq!(rules_for_step(Step::Step1a).len(), 3);
        assert_eq!(rules_for_step(Step::Step1bPost).len(), 5);
        assert_eq!(rules_for_step(Step::Step5).len(), 3);
    }

    #[test]
    fn test_in_step_order() {
        let steps: Vec<Step> = rule_catalog().iter().map(|info| info.step).collect();
        let mut sorted = steps.clone();
        sorted.sort();
        assert_eq!(steps, sorted);
    }

    #[test]
    fn test_serializes_camel_case() {
        let info = &rule_catalog()[0];
        let json = serde_json::to_value(info).unwrap();
        assert_eq!(json["step"], "1a");
        assert_eq!(json["exampleBefore"], "caresses");
        assert_eq!(json["exampleAfter"], "caress");
        assert_eq!(json["condition"], "");
    }
}
