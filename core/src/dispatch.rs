// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Action Dispatch
//!
//! Turns one round's [`Diff`] into command executions. For every added
//! item the add template runs, for every removed item the del template,
//! adds strictly before dels and every command awaited to completion. A
//! failing command is reported and otherwise ignored; nothing a user
//! command does can abort the round or the daemon.
//!
//! The round outcome is the OR across all per-item actions of a round.
//! It gates the trigger: an aggregate command that runs at most once per
//! round, only when something actually succeeded, and always with its
//! literal template text (no placeholder substitution).

use portvigil_common::models::action::ActionTemplate;
use portvigil_common::models::item::Item;
use portvigil_common::models::snapshot::Diff;

use crate::executor::CommandExecutor;
use crate::report::Reporter;

/// What a dispatched command is reacting to; becomes the report tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Add,
    Del,
    Trigger,
}

impl ActionKind {
    pub fn tag(self) -> &'static str {
        match self {
            ActionKind::Add => "ADD",
            ActionKind::Del => "DEL",
            ActionKind::Trigger => "TRIGGER",
        }
    }
}

/// Runs add/del/trigger commands through an executor and reports each
/// outcome. Owns no round state; the watcher threads the outcome through.
pub struct Dispatcher<E> {
    executor: E,
    reporter: Reporter,
}

impl<E: CommandExecutor> Dispatcher<E> {
    pub fn new(executor: E, reporter: Reporter) -> Self {
        Self { executor, reporter }
    }

    /// Dispatches one full diff: all adds, then all dels. Returns the
    /// round outcome (true iff at least one action succeeded).
    pub async fn dispatch(
        &self,
        diff: &Diff,
        on_add: &ActionTemplate,
        on_del: &ActionTemplate,
    ) -> bool {
        let mut succeeded = false;
        for item in &diff.added {
            succeeded |= self.run_action(ActionKind::Add, on_add, item).await;
        }
        for item in &diff.removed {
            succeeded |= self.run_action(ActionKind::Del, on_del, item).await;
        }
        succeeded
    }

    /// Substitutes the template against one item and executes it. Never
    /// propagates a failure; the boolean is the whole story.
    pub async fn run_action(
        &self,
        kind: ActionKind,
        template: &ActionTemplate,
        item: &Item,
    ) -> bool {
        let command = template.render(item);
        let ok = self.executor.run(&command).await;
        self.reporter.action(ok, kind, item.as_str());
        ok
    }

    /// Fires the trigger once, if one is configured and the round had at
    /// least one success. Its own failure is reported and swallowed.
    pub async fn run_trigger(&self, template: Option<&ActionTemplate>, round_succeeded: bool) {
        let Some(template) = template else {
            return;
        };
        if !round_succeeded {
            return;
        }
        let ok = self.executor.run(template.as_str()).await;
        self.reporter.action(ok, ActionKind::Trigger, template.as_str());
    }
}
