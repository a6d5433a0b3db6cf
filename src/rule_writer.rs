use generate_rules::Rule;
use itemset::ItemSet;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Writes one rule per line:
/// `{antecedent}<TAB>{consequent}<TAB>support<TAB>confidence`, itemset
/// members comma-separated in ascending order, percentages with two
/// decimal places.
pub fn write_rules(path: &str, rules: &[Rule]) -> Result<(), Box<Error>> {
    let mut output = BufWriter::new(File::create(path)?);
    for rule in rules {
        writeln!(output, "{}", format_rule(rule))?;
    }
    Ok(())
}

fn format_itemset(itemset: &ItemSet) -> String {
    let ids: Vec<String> = itemset.items().iter().map(|item| item.to_string()).collect();
    format!("{{{}}}", ids.join(","))
}

fn format_rule(rule: &Rule) -> String {
    format!(
        "{}\t{}\t{:.2}\t{:.2}",
        format_itemset(&rule.antecedent),
        format_itemset(&rule.consequent),
        rule.support,
        rule.confidence
    )
}
