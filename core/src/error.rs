// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Failure modes of a snapshot source.
///
/// `BackendUnavailable` at startup is fatal; during steady-state polling
/// the watcher logs either variant and retries on the next interval.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The listing utility could not be invoked at all (not installed,
    /// not on PATH, or it exited reporting failure).
    #[error("'{backend}' could not be invoked: {reason}")]
    BackendUnavailable {
        backend: &'static str,
        reason: String,
    },

    /// The utility ran but produced a line we cannot turn into a
    /// well-formed listening item.
    #[error("unparseable '{backend}' output: {line:?}")]
    Parse {
        backend: &'static str,
        line: String,
    },
}
