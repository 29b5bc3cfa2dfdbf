//! Command-line output for `stem`, `json` and `rules`.

use stemtrace_porter::{rule_catalog, stem, Report};

pub fn print_reports(words: &[String]) {
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let result = stem(word);
        println!("{}", Report::new(&result));
    }
}

pub fn print_json(words: &[String]) -> anyhow::Result<()> {
    for word in words {
        let result = stem(word);
        println!("{}", serde_json::to_string(&result)?);
    }
    Ok(())
}

pub fn print_rules() {
    let mut current = None;
    for info in rule_catalog() {
        if current != Some(info.step) {
            println!();
            println!("Step {}", info.step);
            current = Some(info.step);
        }
        let condition = if info.condition.is_empty() {
            String::new()
        } else {
            format!(" [{}]", info.condition)
        };
        println!(
            "  {}{}  ({} → {})",
            info.label, condition, info.example_before, info.example_after
        );
    }
}
