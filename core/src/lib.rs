// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Portvigil Core
//!
//! The snapshot-diff engine behind the `portvigil` daemon: capture the set
//! of listening sockets, diff it against the previous round, run the
//! configured add/del commands for every change, and fire the aggregate
//! trigger once per round when at least one action succeeded.
//!
//! The two points where the engine touches the outside world are traits:
//! [`source::SnapshotSource`] produces snapshots and
//! [`executor::CommandExecutor`] runs action commands. Everything in
//! between is deterministic and owned by [`watcher::Watcher`].

pub mod dispatch;
pub mod error;
pub mod executor;
pub mod report;
pub mod source;
pub mod watcher;
