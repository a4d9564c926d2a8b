// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::time::Duration;

use crate::models::action::ActionTemplate;
use crate::models::ignore::IgnoreSet;
use crate::models::item::Granularity;

/// Global configuration for one watch daemon run.
///
/// Constructed exactly once at startup from the CLI arguments and then
/// threaded by reference into the watcher and its collaborators. There is
/// no ambient or global state; everything the loop needs lives here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether items are tracked by bare port (`"8080"`) or by full
    /// address:port endpoint (`"0.0.0.0:8080"`).
    pub granularity: Granularity,

    /// Command template executed for every item that appeared since the
    /// previous round. `%p` expands to the port, `%n` to the address
    /// (endpoint granularity only).
    pub on_add: ActionTemplate,

    /// Command template executed for every item that vanished since the
    /// previous round. Same placeholders as [`Config::on_add`].
    pub on_del: ActionTemplate,

    /// Optional aggregate command, run at most once per round and only if
    /// at least one add/del action in that round succeeded. Executed
    /// literally, without placeholder substitution.
    pub trigger: Option<ActionTemplate>,

    /// Ports excluded from every snapshot. Matching is on the whole port
    /// token: ignoring `80` never filters `8080`.
    pub ignore: IgnoreSet,

    /// Pause between polling rounds. The CLI enforces a minimum of one
    /// second.
    pub interval: Duration,

    /// Emit one `[OK]`/`[ERR]` line per dispatched action on stdout.
    /// Without this the daemon is silent during normal operation.
    pub verbose: bool,
}
