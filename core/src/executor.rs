// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Executor
//!
//! The seam through which all side effects happen. Action commands are
//! arbitrary shell text handed to `sh -c` for interpretation; that is the
//! daemon's contract with the user, not an accident, so the command string
//! is executed exactly as substituted. A zero exit status maps to success
//! and everything else, including a failure to spawn the shell at all,
//! maps to failure.

use async_trait::async_trait;
use portvigil_common::debug;
use tokio::process::Command;

/// Runs one concrete (already-substituted) command and reports whether it
/// succeeded. Invocations are awaited to completion; the watcher never
/// overlaps two commands.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn run(&self, command: &str) -> bool;
}

/// The production executor: `sh -c <command>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecutor;

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn run(&self, command: &str) -> bool {
        match Command::new("sh").arg("-c").arg(command).status().await {
            Ok(status) => status.success(),
            Err(e) => {
                debug!("Failed to spawn shell for {command:?}: {e}");
                false
            }
        }
    }
}
