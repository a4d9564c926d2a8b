// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Snapshots and the Snapshot Differ
//!
//! A [`Snapshot`] is the full set of listening items observed at one poll
//! instant, after ignore-filtering. It is immutable once captured: the
//! watcher holds exactly one "previous" snapshot at a time and replaces it
//! wholesale at the end of each round, it never merges.
//!
//! [`Snapshot::diff`] is the heart of the engine. Given the previous and
//! current snapshots it produces the two disjoint change sets:
//!
//! * `added`   = current \ previous (now listening, was not)
//! * `removed` = previous \ current (was listening, is not)
//!
//! An item present in both snapshots appears in neither set. Backing both
//! snapshot and diff with `BTreeSet` keeps iteration lexicographic, so
//! dispatch order is deterministic and tests do not need to sort.

use std::collections::BTreeSet;

use crate::models::item::Item;

/// An unordered set of listening items captured at one poll instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    items: BTreeSet<Item>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item, deduplicating. Returns `false` when the item was
    /// already present.
    pub fn insert(&mut self, item: Item) -> bool {
        self.items.insert(item)
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates items in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Computes the change sets between `self` (previous) and `current`.
    pub fn diff(&self, current: &Snapshot) -> Diff {
        Diff {
            added: current.items.difference(&self.items).cloned().collect(),
            removed: self.items.difference(&current.items).cloned().collect(),
        }
    }
}

impl FromIterator<Item> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// The two disjoint change sets produced by one round's diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    /// Present now, absent in the previous snapshot.
    pub added: BTreeSet<Item>,
    /// Present in the previous snapshot, absent now.
    pub removed: BTreeSet<Item>,
}

impl Diff {
    /// True when nothing changed between the two snapshots.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
