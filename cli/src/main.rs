// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Portvigil CLI Entry Point
//!
//! The binary entry point for the watch daemon.
//!
//! ## Responsibilities
//!
//! 1.  **Runtime Initialization**: `#[tokio::main]` sets up the async
//!     runtime the watch loop, command executions and signal handling
//!     run on.
//! 2.  **Global State Setup**: wires the `tracing` subscriber (stderr,
//!     level driven by `-v` / `RUST_LOG`).
//! 3.  **Configuration Mapping**: converts parsed flags into the
//!     internal `Config` plus the snapshot-source selection.
//! 4.  **Lifecycle**: hands a Ctrl-C shutdown future to the watcher so
//!     the inter-round sleep is interrupted promptly on termination.
//! 5.  **Error Boundary**: a startup failure (bad flags, missing
//!     backend utility) exits 1 before the loop starts; once the loop
//!     is steady it only ends on shutdown.

mod commands;

use std::process::ExitCode;

use portvigil_common::{config::Config, error};
use portvigil_core::{executor::ShellExecutor, source::ListingSource, watcher::Watcher};
use tracing_subscriber::EnvFilter;

use crate::commands::CommandLine;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = match CommandLine::parse_args() {
        Ok(commands) => commands,
        Err(exit_code) => return exit_code,
    };
    init_logging(commands.verbose);

    let cfg = Config::from(&commands);
    let source = ListingSource::new(commands.backend.into(), commands.granularity.into());
    let watcher = Watcher::new(source, ShellExecutor, cfg);

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    match watcher.run(shutdown).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Critical failure: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so stdout stays reserved for the verbose
/// round report lines. `RUST_LOG` overrides the `-v` mapping.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
