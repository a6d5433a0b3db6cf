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

use apriori::Transaction;
use item::Item;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::num::ParseIntError;

/// Reads the whole dataset into memory: one transaction per line, item
/// identifiers separated by tabs. A non-integer token is an immediate
/// error; nothing downstream attempts recovery from malformed input.
pub fn read_transactions(path: &str) -> Result<Vec<Transaction>, Box<Error>> {
    let reader = BufReader::new(File::open(path)?);
    let mut transactions: Vec<Transaction> = vec![];
    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let transaction = parse_transaction(&line).map_err(|e| {
            format!("{}:{}: invalid item id: {}", path, line_number + 1, e)
        })?;
        transactions.push(transaction);
    }
    Ok(transactions)
}

fn parse_transaction(line: &str) -> Result<Transaction, ParseIntError> {
    let mut items = line
        .trim()
        .split('\t')
        .map(|token| token.trim().parse::<Item>())
        .collect::<Result<Vec<Item>, ParseIntError>>()?;

    // Some input files have transactions with duplicate items.
    // Remove any duplicates here.
    items.sort();
    items.dedup();
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::parse_transaction;
    use item::Item;

    fn to_item_vec(nums: &[u32]) -> Vec<Item> {
        nums.iter().map(|&i| Item::with_id(i)).collect()
    }

    #[test]
    fn test_parse_transaction() {
        let cases = [
            ("7\t14", vec![7, 14]),
            ("9", vec![9]),
            ("18\t2\t4\t5\t1", vec![1, 2, 4, 5, 18]),
            ("3\t3\t1\t3", vec![1, 3]),
            ("2\t1\n", vec![1, 2]),
        ];
        for &(line, ref expected) in &cases {
            assert_eq!(parse_transaction(line).unwrap(), to_item_vec(expected));
        }
    }

    #[test]
    fn test_parse_transaction_rejects_bad_tokens() {
        assert!(parse_transaction("1\tbanana\t3").is_err());
        assert!(parse_transaction("1\t-2").is_err());
        assert!(parse_transaction("1 2").is_err());
    }
}
