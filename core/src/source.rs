// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Snapshot Sources
//!
//! A snapshot source produces the set of currently listening TCP sockets,
//! already deduplicated, wildcard-normalized and ignore-filtered. The
//! production implementation shells out to one of the classic listing
//! utilities (`netstat -ltn` or `ss -ltn`) and parses its tabular output;
//! tests substitute scripted sources through the same trait.

mod parse;

use async_trait::async_trait;
use portvigil_common::models::ignore::IgnoreSet;
use portvigil_common::models::item::Granularity;
use portvigil_common::models::snapshot::Snapshot;
use tokio::process::Command;

use crate::error::SourceError;

/// Produces the current snapshot of listening items.
#[async_trait]
pub trait SnapshotSource: Send {
    async fn capture(&mut self, ignore: &IgnoreSet) -> Result<Snapshot, SourceError>;
}

/// Which OS utility is invoked to list listening sockets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Netstat,
    Ss,
}

impl Backend {
    pub fn name(self) -> &'static str {
        match self {
            Backend::Netstat => "netstat",
            Backend::Ss => "ss",
        }
    }

    /// Listening TCP sockets, numeric addresses. Both utilities happen to
    /// accept the same flags for that.
    fn args(self) -> &'static [&'static str] {
        &["-ltn"]
    }
}

/// The production source: spawn the backend utility and parse its output.
#[derive(Debug, Clone, Copy)]
pub struct ListingSource {
    backend: Backend,
    granularity: Granularity,
}

impl ListingSource {
    pub fn new(backend: Backend, granularity: Granularity) -> Self {
        Self {
            backend,
            granularity,
        }
    }
}

#[async_trait]
impl SnapshotSource for ListingSource {
    async fn capture(&mut self, ignore: &IgnoreSet) -> Result<Snapshot, SourceError> {
        let output = Command::new(self.backend.name())
            .args(self.backend.args())
            .output()
            .await
            .map_err(|e| SourceError::BackendUnavailable {
                backend: self.backend.name(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(SourceError::BackendUnavailable {
                backend: self.backend.name(),
                reason: format!(
                    "exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        parse::parse_listing(self.backend, &text, self.granularity, ignore)
    }
}
