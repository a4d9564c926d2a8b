// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Per-action round reporting.
//!
//! When verbose mode is on, every dispatched action prints exactly one
//! line to stdout:
//!
//! ```text
//! portvigil: [2026-08-30 14:03:21] [OK]  ADD: 0.0.0.0:8080
//! ```
//!
//! Without `-v` the daemon stays silent during normal operation; only
//! diagnostic logs (tracing, stderr) remain.

use chrono::Local;
use colored::Colorize;

use crate::dispatch::ActionKind;

/// Program name prefixed to every report line.
pub const NAME: &str = "portvigil";

#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Reports one finished action. `subject` is the item token for
    /// add/del actions and the literal command for the trigger.
    pub fn action(&self, ok: bool, kind: ActionKind, subject: &str) {
        if !self.verbose {
            return;
        }
        let status = if ok {
            "[OK]".green()
        } else {
            "[ERR]".red()
        };
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        println!("{NAME}: [{stamp}] {status}  {}: {subject}", kind.tag());
    }
}
