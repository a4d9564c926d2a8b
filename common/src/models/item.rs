// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Listening Item Model
//!
//! Defines the unit of observation: one TCP endpoint in the LISTEN state.
//!
//! An item is deliberately kept as an opaque string token rather than a
//! parsed socket address. Two snapshots only ever compare items by exact
//! string equality, so the cheapest faithful representation wins. The
//! structure of the token depends on the configured [`Granularity`]:
//!
//! * `Port` — the bare port number, e.g. `"8080"`.
//! * `Endpoint` — address and port joined by the *last* colon, e.g.
//!   `"0.0.0.0:8080"`. Wildcard addresses (`::`, `*`) are normalized to
//!   `0.0.0.0` before an item is constructed, so the same socket never
//!   shows up under two spellings across the IPv4/IPv6 stacks.

use std::fmt;

/// Whether listening sockets are tracked by bare port or by full
/// address:port endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// Track `"8080"` style tokens. `%n` has no meaning here.
    Port,
    /// Track `"0.0.0.0:8080"` style tokens.
    Endpoint,
}

/// One observed listening endpoint.
///
/// Ordered lexicographically on the underlying token, which gives
/// snapshots a stable iteration order for deterministic dispatch.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item(String);

impl Item {
    /// Builds a bare-port item.
    pub fn port(port: &str) -> Self {
        Self(port.to_string())
    }

    /// Builds an address:port item, normalizing wildcard addresses.
    pub fn endpoint(addr: &str, port: &str) -> Self {
        Self(format!("{}:{port}", normalize_addr(addr)))
    }

    /// The port component: everything after the last `:`, or the whole
    /// token for bare-port items.
    pub fn port_component(&self) -> &str {
        match self.0.rfind(':') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// The address component: everything before the last `:`. Bare-port
    /// items have none.
    pub fn addr_component(&self) -> Option<&str> {
        self.0.rfind(':').map(|idx| &self.0[..idx])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collapses the wildcard spellings the listing utilities emit (`::` for
/// the IPv6 any-address, `*` for netstat's any-address) onto `0.0.0.0`.
pub fn normalize_addr(addr: &str) -> &str {
    match addr {
        "::" | "*" | "" => "0.0.0.0",
        other => other,
    }
}
