// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Tabular-output parsing for the `netstat` and `ss` backends.
//!
//! Both utilities print one socket per line with the local address in the
//! fourth column. They differ in how a line is recognized as a listening
//! TCP socket (`netstat` tags the protocol first and the state last, `ss`
//! leads with the state because it was invoked with `-l`) and in how they
//! spell IPv6 addresses (`:::80` vs `[::]:80`).

use portvigil_common::models::ignore::IgnoreSet;
use portvigil_common::models::item::{Granularity, Item};
use portvigil_common::models::snapshot::Snapshot;

use crate::error::SourceError;
use crate::source::Backend;

/// Local address sits in the fourth whitespace-separated column for both
/// backends.
const LOCAL_ADDR_COLUMN: usize = 3;

/// Parses a full backend output into a deduplicated, ignore-filtered
/// snapshot at the requested granularity.
pub fn parse_listing(
    backend: Backend,
    text: &str,
    granularity: Granularity,
    ignore: &IgnoreSet,
) -> Result<Snapshot, SourceError> {
    let mut snapshot = Snapshot::new();

    for line in text.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if !is_listening_row(backend, &fields) {
            continue;
        }

        let local = fields
            .get(LOCAL_ADDR_COLUMN)
            .ok_or_else(|| parse_error(backend, line))?;
        let (addr, port) = split_local_addr(local).ok_or_else(|| parse_error(backend, line))?;

        if ignore.contains(port) {
            continue;
        }

        snapshot.insert(match granularity {
            Granularity::Port => Item::port(port),
            Granularity::Endpoint => Item::endpoint(addr, port),
        });
    }

    Ok(snapshot)
}

/// Headers, blank lines and non-TCP rows are skipped, they are expected
/// noise rather than parse failures.
fn is_listening_row(backend: Backend, fields: &[&str]) -> bool {
    match (backend, fields.first()) {
        (Backend::Netstat, Some(proto)) => {
            proto.starts_with("tcp") && fields.last() == Some(&"LISTEN")
        }
        (Backend::Ss, Some(state)) => *state == "LISTEN",
        (_, None) => false,
    }
}

/// Splits `0.0.0.0:22`, `:::22`, `[::]:22` or `*:22` into address and
/// port at the last colon, stripping `ss`-style brackets.
fn split_local_addr(local: &str) -> Option<(&str, &str)> {
    let idx = local.rfind(':')?;
    let port = &local[idx + 1..];
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let addr = local[..idx].trim_start_matches('[').trim_end_matches(']');
    Some((addr, port))
}

fn parse_error(backend: Backend, line: &str) -> SourceError {
    SourceError::Parse {
        backend: backend.name(),
        line: line.to_string(),
    }
}
