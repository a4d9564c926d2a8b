// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # The Poll Loop Controller
//!
//! Owns the one piece of state the daemon has: the previous round's
//! snapshot. Each round captures a fresh snapshot, diffs it against the
//! held one, dispatches the changes, fires the trigger and replaces the
//! held snapshot wholesale.
//!
//! The very first round is special. With no real previous state, every
//! currently listening item is dispatched as "added" directly instead of
//! being diffed against an artificial empty snapshot, and a capture
//! failure here is fatal: a backend that cannot even start is a
//! configuration problem, not a transient one.
//!
//! Once steady, a capture failure only costs that round. The held
//! snapshot is retained, a warning is logged and the loop re-polls after
//! the next interval. The loop itself never terminates on its own; it
//! runs until the shutdown future passed to [`Watcher::run`] resolves,
//! which also interrupts an in-progress inter-round sleep promptly.

use portvigil_common::config::Config;
use portvigil_common::models::snapshot::Snapshot;
use portvigil_common::{debug, info, warn};

use crate::dispatch::{ActionKind, Dispatcher};
use crate::error::SourceError;
use crate::executor::CommandExecutor;
use crate::report::Reporter;
use crate::source::SnapshotSource;

/// The daemon's single logical thread of control.
pub struct Watcher<S, E> {
    source: S,
    dispatcher: Dispatcher<E>,
    cfg: Config,
    previous: Snapshot,
}

impl<S: SnapshotSource, E: CommandExecutor> Watcher<S, E> {
    pub fn new(source: S, executor: E, cfg: Config) -> Self {
        let dispatcher = Dispatcher::new(executor, Reporter::new(cfg.verbose));
        Self {
            source,
            dispatcher,
            cfg,
            previous: Snapshot::new(),
        }
    }

    /// The snapshot held from the last completed round.
    pub fn previous(&self) -> &Snapshot {
        &self.previous
    }

    /// Runs the daemon until `shutdown` resolves. The startup round runs
    /// immediately; steady rounds follow after each interval sleep.
    pub async fn run(
        mut self,
        shutdown: impl Future<Output = ()>,
    ) -> Result<(), SourceError> {
        self.startup_round().await?;

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping watch loop");
                    return Ok(());
                }
                _ = tokio::time::sleep(self.cfg.interval) => {}
            }
            self.poll_round().await;
        }
    }

    /// The STARTING round: capture, dispatch everything as added, fire
    /// the trigger, store the snapshot. Capture failure is fatal here.
    pub async fn startup_round(&mut self) -> Result<(), SourceError> {
        let snapshot = self.source.capture(&self.cfg.ignore).await?;
        info!(
            "Initial capture found {} listening item(s)",
            snapshot.len()
        );

        let mut succeeded = false;
        for item in snapshot.iter() {
            succeeded |= self
                .dispatcher
                .run_action(ActionKind::Add, &self.cfg.on_add, item)
                .await;
        }
        self.dispatcher
            .run_trigger(self.cfg.trigger.as_ref(), succeeded)
            .await;

        self.previous = snapshot;
        Ok(())
    }

    /// One STEADY round: capture, diff, dispatch, trigger, replace. A
    /// capture failure is logged and the round skipped; the previous
    /// snapshot stays authoritative until a capture succeeds again.
    pub async fn poll_round(&mut self) {
        let current = match self.source.capture(&self.cfg.ignore).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Snapshot capture failed, retrying next interval: {e}");
                return;
            }
        };

        let diff = self.previous.diff(&current);
        if !diff.is_empty() {
            debug!(
                "Round diff: {} added, {} removed",
                diff.added.len(),
                diff.removed.len()
            );
        }

        let succeeded = self
            .dispatcher
            .dispatch(&diff, &self.cfg.on_add, &self.cfg.on_del)
            .await;
        self.dispatcher
            .run_trigger(self.cfg.trigger.as_ref(), succeeded)
            .await;

        self.previous = current;
    }
}
