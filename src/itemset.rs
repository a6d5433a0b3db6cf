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

use item::Item;
use itertools::Itertools;
use std::cmp;

/// Canonical itemset key: an ascending-sorted, deduplicated sequence of
/// items. Equality and hashing are defined purely on the sequence content,
/// so lookups behave the same however the set was constructed.
#[derive(Clone, Hash, PartialEq, Eq, Debug, Ord)]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    pub fn new(items: Vec<Item>) -> ItemSet {
        let mut items: Vec<Item> = items.into_iter().sorted().collect();
        items.dedup();
        ItemSet { items: items }
    }

    pub fn single(item: Item) -> ItemSet {
        ItemSet { items: vec![item] }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn union(&self, other: &ItemSet) -> ItemSet {
        ItemSet {
            items: union(&self.items, &other.items),
        }
    }

    /// Items of `self` that are not in `other`.
    pub fn difference(&self, other: &ItemSet) -> ItemSet {
        ItemSet {
            items: difference(&self.items, &other.items),
        }
    }

    pub fn is_subset_of(&self, other: &[Item]) -> bool {
        is_subset(&self.items, other)
    }
}

impl PartialOrd for ItemSet {
    fn partial_cmp(&self, other: &ItemSet) -> Option<cmp::Ordering> {
        if other.len() != self.len() {
            return Some(self.len().cmp(&other.len()));
        }
        Some(self.items.cmp(&other.items))
    }
}

// Assumes both vectors are sorted.
pub fn union<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PartialOrd + Copy,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len() + b.len());
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        if a[ap] < b[bp] {
            c.push(a[ap]);
            ap += 1;
        } else if b[bp] < a[ap] {
            c.push(b[bp]);
            bp += 1;
        } else {
            c.push(a[ap]);
            ap += 1;
            bp += 1;
        }
    }
    while ap < a.len() {
        c.push(a[ap]);
        ap += 1;
    }
    while bp < b.len() {
        c.push(b[bp]);
        bp += 1;
    }
    c
}

// Items of a that aren't in b. Assumes both vectors are sorted.
pub fn difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PartialOrd + Copy,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len());
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        if a[ap] < b[bp] {
            c.push(a[ap]);
            ap += 1;
        } else if b[bp] < a[ap] {
            bp += 1;
        } else {
            ap += 1;
            bp += 1;
        }
    }
    while ap < a.len() {
        c.push(a[ap]);
        ap += 1;
    }
    c
}

// Whether every element of a occurs in b. Assumes both vectors are sorted.
pub fn is_subset<T>(a: &[T], b: &[T]) -> bool
where
    T: PartialOrd + Copy,
{
    let mut bp = 0;
    for item in a {
        while bp < b.len() && b[bp] < *item {
            bp += 1;
        }
        if bp == b.len() || b[bp] != *item {
            return false;
        }
        bp += 1;
    }
    true
}
