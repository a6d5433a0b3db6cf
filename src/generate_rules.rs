use apriori::FrequentTable;
use itemset::ItemSet;
use itertools::Itertools;

/// A directed association rule between two disjoint, nonempty itemsets
/// whose union is frequent. Support and confidence are percentages,
/// rounded to two decimal places.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub antecedent: ItemSet,
    pub consequent: ItemSet,
    pub support: f64,
    pub confidence: f64,
}

fn round_percent(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derives every association rule from the mined frequent itemsets: for
/// each itemset of size ≥ 2, every nonempty proper subset becomes an
/// antecedent, with the complement as consequent. No confidence cutoff
/// is applied; all derivable rules are emitted.
pub fn generate_rules(levels: &[FrequentTable], num_transactions: usize) -> Vec<Rule> {
    let mut rules: Vec<Rule> = vec![];
    // Size-1 itemsets (level index 0) cannot be split into two nonempty
    // parts.
    for table in levels.iter().skip(1) {
        for (itemset, &count) in table.iter().sorted_by(|a, b| a.0.items().cmp(b.0.items())) {
            // Every split of the same itemset shares this support.
            let support = round_percent(100.0 * count as f64 / num_transactions as f64);
            for size in 1..itemset.len() {
                for antecedent in itemset.items().iter().cloned().combinations(size) {
                    let antecedent = ItemSet::new(antecedent);
                    let consequent = itemset.difference(&antecedent);
                    // The antecedent is a subset of a frequent itemset,
                    // so by downward closure its own level must hold it.
                    // A miss here is a defect in the miner, not a
                    // runtime condition.
                    let antecedent_count = levels[antecedent.len() - 1]
                        .get(&antecedent)
                        .expect("downward closure violated: antecedent not in its level's table");
                    let confidence =
                        round_percent(100.0 * count as f64 / *antecedent_count as f64);
                    rules.push(Rule {
                        antecedent: antecedent,
                        consequent: consequent,
                        support: support,
                        confidence: confidence,
                    });
                }
            }
        }
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use apriori::frequent_itemsets;
    use apriori::Transaction;
    use item::Item;

    fn itemset(ids: &[u32]) -> ItemSet {
        ItemSet::new(ids.iter().map(|&i| Item::with_id(i)).collect())
    }

    fn example_levels() -> (Vec<FrequentTable>, usize) {
        let transactions: Vec<Transaction> = [
            vec![1, 2, 3],
            vec![1, 2],
            vec![1, 3],
            vec![2, 3],
            vec![1],
        ].iter()
            .map(|row| row.iter().map(|&i| Item::with_id(i)).collect())
            .collect();
        (frequent_itemsets(&transactions, 2.0), transactions.len())
    }

    fn find<'a>(rules: &'a [Rule], antecedent: &ItemSet, consequent: &ItemSet) -> &'a Rule {
        rules
            .iter()
            .find(|r| r.antecedent == *antecedent && r.consequent == *consequent)
            .expect("rule not derived")
    }

    #[test]
    fn test_worked_example() {
        let (levels, num_transactions) = example_levels();
        let rules = generate_rules(&levels, num_transactions);

        // Three frequent pairs, each splitting two ways.
        assert_eq!(rules.len(), 6);

        let rule = find(&rules, &itemset(&[1]), &itemset(&[2]));
        assert_eq!(rule.support, 40.0);
        assert_eq!(rule.confidence, 50.0);

        // 2/3 rounds to 66.67.
        let rule = find(&rules, &itemset(&[2]), &itemset(&[1]));
        assert_eq!(rule.support, 40.0);
        assert_eq!(rule.confidence, 66.67);

        let rule = find(&rules, &itemset(&[3]), &itemset(&[2]));
        assert_eq!(rule.support, 40.0);
        assert_eq!(rule.confidence, 66.67);
    }

    #[test]
    fn test_rules_from_one_itemset_share_support() {
        let transactions: Vec<Transaction> = [
            vec![1, 2, 3, 4],
            vec![1, 2, 3, 4],
            vec![1, 2, 3],
            vec![1, 2],
            vec![4],
        ].iter()
            .map(|row| row.iter().map(|&i| Item::with_id(i)).collect())
            .collect();
        let levels = frequent_itemsets(&transactions, 2.0);
        let rules = generate_rules(&levels, transactions.len());

        // {1,2,3,4} is frequent (count 2); all 14 splits of it report
        // the same support, 2/5 = 40%.
        let splits: Vec<&Rule> = rules
            .iter()
            .filter(|r| r.antecedent.union(&r.consequent) == itemset(&[1, 2, 3, 4]))
            .collect();
        assert_eq!(splits.len(), 14);
        for rule in &splits {
            assert_eq!(rule.support, 40.0);
        }

        // Antecedents and consequents are always disjoint and nonempty.
        for rule in &rules {
            assert!(rule.antecedent.len() > 0);
            assert!(rule.consequent.len() > 0);
            assert_eq!(rule.antecedent.difference(&rule.consequent), rule.antecedent);
        }
    }

    #[test]
    fn test_confidence_bounds() {
        let (levels, num_transactions) = example_levels();
        let rules = generate_rules(&levels, num_transactions);
        for rule in &rules {
            assert!(rule.confidence > 0.0 && rule.confidence <= 100.0);
            assert!(rule.support > 0.0 && rule.support <= 100.0);
            assert!(rule.confidence >= rule.support);
        }
    }

    #[test]
    fn test_no_rules_below_size_two() {
        let (levels, num_transactions) = example_levels();
        // Only the size-1 level: nothing to split.
        let rules = generate_rules(&levels[..1], num_transactions);
        assert!(rules.is_empty());

        let rules = generate_rules(&[], num_transactions);
        assert!(rules.is_empty());
    }
}
