// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use fnv::{FnvHashMap, FnvHashSet};
use item::Item;
use itemset::ItemSet;
use rayon::prelude::*;

/// A transaction, held as an ascending-sorted, deduplicated item vector
/// so candidates can be subset-tested against it with a merge walk.
pub type Transaction = Vec<Item>;

/// The frequent itemsets of one size, mapped to their support counts.
pub type FrequentTable = FnvHashMap<ItemSet, u32>;

/// Converts a minimum-support percentage into an absolute count. The
/// result may be fractional; frequency tests are `count < min_support`
/// strict-less-than, so a count exactly at the threshold is frequent.
pub fn minimum_support_count(percentage: f64, num_transactions: usize) -> f64 {
    percentage / 100.0 * num_transactions as f64
}

/// Level-wise Apriori. Returns one table per itemset size, starting at
/// size 1, stopping before the first size at which no itemset is
/// frequent. The result never contains an empty table.
pub fn frequent_itemsets(
    transactions: &[Transaction],
    min_support: f64,
) -> Vec<FrequentTable> {
    let mut levels: Vec<FrequentTable> = vec![];

    // Size-1 itemsets are counted directly off the dataset; there is no
    // smaller level to prune against.
    let mut counts: FrequentTable = FnvHashMap::default();
    for transaction in transactions {
        for &item in transaction {
            *counts.entry(ItemSet::single(item)).or_insert(0) += 1;
        }
    }
    let (frequent, mut removed) = filter_frequent(counts, min_support);
    if frequent.is_empty() {
        return levels;
    }
    levels.push(frequent);

    loop {
        let (frequent, removed_now) =
            next_level(transactions, levels.last().unwrap(), &removed, min_support);
        // Only this level's casualties matter for the next level's
        // pruning pass; earlier levels are already accounted for by
        // downward closure.
        removed = removed_now;
        if frequent.is_empty() {
            break;
        }
        levels.push(frequent);
    }

    levels
}

/// One step of the level loop: generates size-(k+1) candidates from the
/// size-k frequent table, prunes them against the keys removed while
/// filtering level k, counts the survivors in one dataset scan, and
/// splits them into the new frequent table and this level's removed
/// keys.
fn next_level(
    transactions: &[Transaction],
    previous: &FrequentTable,
    removed: &[ItemSet],
    min_support: f64,
) -> (FrequentTable, Vec<ItemSet>) {
    let candidates = prune(generate_candidates(previous), removed);
    let counts = count_candidates(&candidates, transactions);
    filter_frequent(counts, min_support)
}

/// Unions every unordered pair of frequent size-k itemsets, keeping the
/// unions with exactly k+1 distinct items. The set dedupes candidates
/// reachable from more than one pair.
fn generate_candidates(previous: &FrequentTable) -> FnvHashSet<ItemSet> {
    let itemsets: Vec<&ItemSet> = previous.keys().collect();
    let target_len = match itemsets.first() {
        Some(itemset) => itemset.len() + 1,
        None => return FnvHashSet::default(),
    };
    let mut candidates: FnvHashSet<ItemSet> = FnvHashSet::default();
    for i in 0..itemsets.len() {
        for j in (i + 1)..itemsets.len() {
            let unioned = itemsets[i].union(itemsets[j]);
            if unioned.len() == target_len {
                candidates.insert(unioned);
            }
        }
    }
    candidates
}

/// Apriori pruning: a candidate containing an itemset just found
/// infrequent at the previous level cannot itself be frequent, so it is
/// dropped without being counted.
fn prune(candidates: FnvHashSet<ItemSet>, removed: &[ItemSet]) -> Vec<ItemSet> {
    candidates
        .into_iter()
        .filter(|candidate| {
            !removed
                .iter()
                .any(|infrequent| infrequent.is_subset_of(candidate.items()))
        })
        .collect()
}

/// One scan of the dataset, counting how many transactions contain each
/// candidate. Candidates are counted independently over the immutable
/// dataset, so this parallelizes without affecting the result.
fn count_candidates(
    candidates: &[ItemSet],
    transactions: &[Transaction],
) -> FrequentTable {
    candidates
        .par_iter()
        .map(|candidate| {
            let count = transactions
                .iter()
                .filter(|transaction| candidate.is_subset_of(transaction))
                .count() as u32;
            (candidate.clone(), count)
        })
        .collect()
}

/// Splits counted itemsets into the frequent table and the list of
/// removed (infrequent) keys for the next level's pruning pass.
fn filter_frequent(counts: FrequentTable, min_support: f64) -> (FrequentTable, Vec<ItemSet>) {
    let mut frequent: FrequentTable = FnvHashMap::default();
    let mut removed: Vec<ItemSet> = vec![];
    for (itemset, count) in counts {
        if (count as f64) < min_support {
            removed.push(itemset);
        } else {
            frequent.insert(itemset, count);
        }
    }
    (frequent, removed)
}
