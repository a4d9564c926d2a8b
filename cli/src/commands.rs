// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! The single source of truth for the daemon's flag schema.
//!
//! This module performs two jobs:
//!
//! 1. **Input Normalization**: `clap` validates user input up front — the
//!    required action templates, the interval floor of one second, the
//!    backend and granularity choices — so the watch loop never starts on
//!    a half-valid configuration. Any validation failure exits with code 1
//!    before the loop begins; `--help`/`--version` exit 0.
//! 2. **State Translation**: the `From<&CommandLine> for Config`
//!    implementation decouples the flag surface from the internal
//!    configuration the core crates consume, so those stay agnostic of
//!    the user interface layer.
//!
//! Action commands are deliberately opaque shell text. The only check
//! applied to them is the leading-dash rejection, which catches the
//! classic mistake of a flag swallowed as a command.

use std::process::ExitCode;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use portvigil_common::config::Config;
use portvigil_common::models::action::ActionTemplate;
use portvigil_common::models::ignore::IgnoreSet;
use portvigil_common::models::item::Granularity;
use portvigil_core::source::Backend;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nAuthors: the portvigil contributors",
    "\nLicense: MPL-2.0",
    "\nhttps://github.com/portvigil/portvigil",
);

#[derive(Parser)]
#[command(name = "portvigil")]
#[command(about = "Watches TCP listening ports and runs commands when they change.")]
#[command(version = LONG_VERSION)]
pub struct CommandLine {
    /// Command run for each newly listening item (%p = port, %n = address)
    #[arg(
        short = 'a',
        long = "on-add",
        value_name = "CMD",
        value_parser = parse_template,
        allow_hyphen_values = true
    )]
    pub on_add: ActionTemplate,

    /// Command run for each item that stopped listening (%p = port, %n = address)
    #[arg(
        short = 'd',
        long = "on-del",
        value_name = "CMD",
        value_parser = parse_template,
        allow_hyphen_values = true
    )]
    pub on_del: ActionTemplate,

    /// Comma-separated ports to exclude from every snapshot
    #[arg(short = 'p', long = "ignore", value_name = "PORTS")]
    pub ignore: Option<String>,

    /// Aggregate command run once per round when any action succeeded
    #[arg(
        short = 't',
        long = "trigger",
        value_name = "CMD",
        value_parser = parse_template,
        allow_hyphen_values = true
    )]
    pub trigger: Option<ActionTemplate>,

    /// Which utility lists the listening sockets
    #[arg(short = 'w', long = "with", value_enum, default_value = "netstat")]
    pub backend: BackendArg,

    /// Track items by full address:port endpoint or by bare port
    #[arg(
        short = 'g',
        long = "granularity",
        value_enum,
        default_value = "endpoint"
    )]
    pub granularity: GranularityArg,

    /// Seconds between polling rounds
    #[arg(
        short = 'i',
        long = "interval",
        value_name = "SECONDS",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: u64,

    /// Print an [OK]/[ERR] line per dispatched action on stdout
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Netstat,
    Ss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GranularityArg {
    Endpoint,
    Port,
}

impl CommandLine {
    /// Parses the process arguments, turning clap's exit conventions
    /// into ours: help/version exit 0, every validation failure exits 1.
    pub fn parse_args() -> Result<Self, ExitCode> {
        Self::try_parse().map_err(|e| {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            }
        })
    }
}

fn parse_template(raw: &str) -> Result<ActionTemplate, String> {
    ActionTemplate::new(raw).map_err(|e| e.to_string())
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        Self {
            granularity: cmd.granularity.into(),
            on_add: cmd.on_add.clone(),
            on_del: cmd.on_del.clone(),
            trigger: cmd.trigger.clone(),
            ignore: IgnoreSet::parse(cmd.ignore.as_deref().unwrap_or("")),
            interval: Duration::from_secs(cmd.interval),
            verbose: cmd.verbose,
        }
    }
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Netstat => Backend::Netstat,
            BackendArg::Ss => Backend::Ss,
        }
    }
}

impl From<GranularityArg> for Granularity {
    fn from(arg: GranularityArg) -> Self {
        match arg {
            GranularityArg::Endpoint => Granularity::Endpoint,
            GranularityArg::Port => Granularity::Port,
        }
    }
}
