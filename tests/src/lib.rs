// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

mod rounds;

pub mod utils {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use portvigil_common::models::ignore::IgnoreSet;
    use portvigil_common::models::item::Item;
    use portvigil_common::models::snapshot::Snapshot;
    use portvigil_core::error::SourceError;
    use portvigil_core::executor::CommandExecutor;
    use portvigil_core::source::SnapshotSource;

    /// Replays a fixed sequence of capture results, one per round.
    pub struct ScriptedSource {
        captures: Mutex<VecDeque<Result<Snapshot, SourceError>>>,
    }

    impl ScriptedSource {
        pub fn new(captures: Vec<Result<Snapshot, SourceError>>) -> Self {
            Self {
                captures: Mutex::new(captures.into()),
            }
        }
    }

    #[async_trait]
    impl SnapshotSource for ScriptedSource {
        async fn capture(&mut self, _ignore: &IgnoreSet) -> Result<Snapshot, SourceError> {
            self.captures
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted source ran out of captures")
        }
    }

    /// Records every executed command; succeeds unless the command text
    /// appears in the failure list.
    #[derive(Default)]
    pub struct RecordingExecutor {
        commands: Mutex<Vec<String>>,
        failing: Vec<String>,
    }

    impl RecordingExecutor {
        pub fn failing(commands: &[&str]) -> Self {
            Self {
                commands: Mutex::new(Vec::new()),
                failing: commands.iter().map(|c| c.to_string()).collect(),
            }
        }

        pub fn commands(&self) -> Vec<String> {
            self.commands.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandExecutor for &RecordingExecutor {
        async fn run(&self, command: &str) -> bool {
            self.commands.lock().unwrap().push(command.to_string());
            !self.failing.iter().any(|f| f == command)
        }
    }

    /// Builds a bare-port snapshot.
    pub fn ports(ports: &[&str]) -> Snapshot {
        ports.iter().map(|p| Item::port(p)).collect()
    }

    /// Builds an endpoint snapshot from `addr:port` pairs.
    pub fn endpoints(pairs: &[(&str, &str)]) -> Snapshot {
        pairs
            .iter()
            .map(|(addr, port)| Item::endpoint(addr, port))
            .collect()
    }
}
