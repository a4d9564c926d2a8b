// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Ignore Filter
//!
//! Ports excluded from every snapshot, supplied once at startup as a
//! comma-separated list. Matching is on the whole port token, never on a
//! substring: ignoring `80` must leave `8080` and `180` alone.

use std::collections::HashSet;

/// The set of ignored port tokens. Immutable for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    ports: HashSet<String>,
}

impl IgnoreSet {
    /// Parses a comma-separated ignore list like `"80,443"`. Empty input
    /// (or input that is all commas/whitespace) ignores nothing.
    pub fn parse(raw: &str) -> Self {
        Self {
            ports: raw
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// True when the given port token is ignored. Exact match only.
    pub fn contains(&self, port: &str) -> bool {
        self.ports.contains(port)
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}
