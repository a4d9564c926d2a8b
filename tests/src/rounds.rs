// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]

use std::time::{Duration, Instant};

use portvigil_common::config::Config;
use portvigil_common::models::action::ActionTemplate;
use portvigil_common::models::ignore::IgnoreSet;
use portvigil_common::models::item::Granularity;
use portvigil_core::watcher::Watcher;

use crate::utils::{RecordingExecutor, ScriptedSource, endpoints, ports};

fn config(granularity: Granularity, trigger: Option<&str>) -> Config {
    Config {
        granularity,
        on_add: ActionTemplate::new("echo ADD %p").unwrap(),
        on_del: ActionTemplate::new("echo DEL %p").unwrap(),
        trigger: trigger.map(|t| ActionTemplate::new(t).unwrap()),
        ignore: IgnoreSet::default(),
        interval: Duration::from_secs(1),
        verbose: false,
    }
}

#[tokio::test]
async fn test_end_to_end_port_change_scenario() {
    // Previous {22, 80}, current {22, 8080}: exactly one add and one
    // del must run, then the trigger, exactly once each.
    let source = ScriptedSource::new(vec![
        Ok(ports(&["22", "80"])),
        Ok(ports(&["22", "8080"])),
    ]);
    let executor = RecordingExecutor::default();
    let mut watcher = Watcher::new(source, &executor, config(Granularity::Port, Some("notify")));

    watcher.startup_round().await.unwrap();
    watcher.poll_round().await;

    let commands = executor.commands();
    let steady = &commands[3..];
    assert_eq!(
        steady.iter().filter(|c| *c == "echo ADD 8080").count(),
        1,
        "add action must run exactly once: {commands:?}"
    );
    assert_eq!(
        steady.iter().filter(|c| *c == "echo DEL 80").count(),
        1,
        "del action must run exactly once: {commands:?}"
    );
    assert_eq!(
        steady.iter().filter(|c| *c == "notify").count(),
        1,
        "trigger must fire exactly once: {commands:?}"
    );
    assert_eq!(steady.len(), 3);
}

#[tokio::test]
async fn test_endpoint_granularity_substitutes_both_placeholders() {
    let source = ScriptedSource::new(vec![Ok(endpoints(&[("10.0.0.1", "8080")]))]);
    let executor = RecordingExecutor::default();

    let mut cfg = config(Granularity::Endpoint, None);
    cfg.on_add = ActionTemplate::new("notify.sh -p %p -n %n").unwrap();
    let mut watcher = Watcher::new(source, &executor, cfg);

    watcher.startup_round().await.unwrap();

    assert_eq!(executor.commands(), vec!["notify.sh -p 8080 -n 10.0.0.1"]);
}

#[tokio::test]
async fn test_trigger_fires_once_even_when_most_actions_fail() {
    // Four changes, only one command succeeds; the round outcome must
    // still be true and the trigger must fire exactly once.
    let source = ScriptedSource::new(vec![
        Ok(ports(&["1", "2", "3"])),
        Ok(ports(&["4", "5"])),
    ]);
    let executor = RecordingExecutor::failing(&[
        "echo ADD 4",
        "echo DEL 1",
        "echo DEL 2",
    ]);
    let mut watcher = Watcher::new(source, &executor, config(Granularity::Port, Some("notify")));

    watcher.startup_round().await.unwrap();
    let after_startup = executor.commands().len();
    watcher.poll_round().await;

    let steady = executor.commands()[after_startup..].to_vec();
    // adds 4,5 then dels 1,2,3; only "echo ADD 5" and "echo DEL 3" pass.
    assert_eq!(steady.iter().filter(|c| *c == "notify").count(), 1);
}

#[tokio::test]
async fn test_trigger_suppressed_when_every_action_fails() {
    let source = ScriptedSource::new(vec![
        Ok(ports(&[])),
        Ok(ports(&["9090"])),
    ]);
    let executor = RecordingExecutor::failing(&["echo ADD 9090"]);
    let mut watcher = Watcher::new(source, &executor, config(Granularity::Port, Some("notify")));

    watcher.startup_round().await.unwrap();
    watcher.poll_round().await;

    assert_eq!(executor.commands(), vec!["echo ADD 9090"]);
}

#[tokio::test]
async fn test_quiet_rounds_in_sequence_dispatch_nothing() {
    let source = ScriptedSource::new(vec![
        Ok(ports(&["22"])),
        Ok(ports(&["22"])),
        Ok(ports(&["22"])),
        Ok(ports(&["22"])),
    ]);
    let executor = RecordingExecutor::default();
    let mut watcher = Watcher::new(source, &executor, config(Granularity::Port, Some("notify")));

    watcher.startup_round().await.unwrap();
    for _ in 0..3 {
        watcher.poll_round().await;
    }

    // Startup dispatched one add plus the trigger; nothing since.
    assert_eq!(executor.commands(), vec!["echo ADD 22", "notify"]);
}

#[tokio::test]
async fn test_shutdown_interrupts_the_interval_sleep() {
    let source = ScriptedSource::new(vec![Ok(ports(&["22"]))]);
    let executor = RecordingExecutor::default();
    let cfg = Config {
        interval: Duration::from_secs(3600),
        ..config(Granularity::Port, None)
    };
    let watcher = Watcher::new(source, &executor, cfg);

    let started = Instant::now();
    watcher
        .run(async {
            tokio::time::sleep(Duration::from_millis(50)).await;
        })
        .await
        .unwrap();

    assert!(
        started.elapsed() < Duration::from_secs(5),
        "shutdown must interrupt the sleep promptly"
    );
    assert_eq!(executor.commands(), vec!["echo ADD 22"]);
}

#[cfg(unix)]
mod shell {
    use std::fs;

    use portvigil_core::executor::ShellExecutor;

    use super::*;

    /// Temp file that cleans up after itself.
    struct Scratch(std::path::PathBuf);

    impl Scratch {
        fn new(tag: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "portvigil-test-{tag}-{}",
                std::process::id()
            ));
            let _ = fs::remove_file(&path);
            Self(path)
        }

        fn path(&self) -> String {
            self.0.display().to_string()
        }

        fn contents(&self) -> String {
            fs::read_to_string(&self.0).unwrap_or_default()
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[tokio::test]
    async fn test_real_shell_round_writes_through_redirection() {
        let scratch = Scratch::new("rounds");
        let out = scratch.path();

        let source = ScriptedSource::new(vec![
            Ok(ports(&["80"])),
            Ok(ports(&["8080"])),
        ]);
        let cfg = Config {
            on_add: ActionTemplate::new(&format!("echo ADD %p >> {out}")).unwrap(),
            on_del: ActionTemplate::new(&format!("echo DEL %p >> {out}")).unwrap(),
            trigger: Some(ActionTemplate::new(&format!("echo TRIGGER >> {out}")).unwrap()),
            ..config(Granularity::Port, None)
        };
        let mut watcher = Watcher::new(source, ShellExecutor, cfg);

        watcher.startup_round().await.unwrap();
        watcher.poll_round().await;

        assert_eq!(
            scratch.contents(),
            "ADD 80\nTRIGGER\nADD 8080\nDEL 80\nTRIGGER\n"
        );
    }
}
