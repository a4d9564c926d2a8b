// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Action Templates
//!
//! A template is the user-supplied command string for an add, del or
//! trigger action. It is arbitrary shell text and is executed as such by
//! design; the daemon only performs placeholder substitution, it never
//! parses or validates the command itself.
//!
//! Placeholders:
//!
//! * `%p` — the item's port component.
//! * `%n` — the item's address component. Only meaningful for endpoint
//!   granularity; for bare-port items `%n` is left untouched since there
//!   is no address to substitute.

use anyhow::ensure;

use crate::models::item::Item;

/// An immutable command template. Substitution produces a fresh concrete
/// command string per item and never mutates the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTemplate {
    raw: String,
}

impl ActionTemplate {
    /// Validates and wraps a raw template. Rejects commands starting with
    /// `-`, which are invariably a mistyped flag rather than a command.
    pub fn new(raw: &str) -> anyhow::Result<Self> {
        ensure!(
            !raw.starts_with('-'),
            "action command must not start with '-': {raw}"
        );
        Ok(Self {
            raw: raw.to_string(),
        })
    }

    /// Expands `%p`/`%n` against one item, yielding the concrete command.
    pub fn render(&self, item: &Item) -> String {
        let with_port = self.raw.replace("%p", item.port_component());
        match item.addr_component() {
            Some(addr) => with_port.replace("%n", addr),
            None => with_port,
        }
    }

    /// The template text verbatim, as the trigger action runs it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}
