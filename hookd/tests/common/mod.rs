#![allow(dead_code)]

//! Shared test doubles

use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use hookd::deploy::exec::{CommandExecutor, CommandOutcome};
use hookd::deploy::plan::CommandSpec;
use hookd::errors::HookdError;

/// Scripted executor that records every command instead of spawning
/// child processes.
pub struct MockExecutor {
    log: Mutex<Vec<String>>,
    failing: HashSet<String>,
    delay: Option<Duration>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self {
            log: Mutex::new(Vec::new()),
            failing: HashSet::new(),
            delay: None,
        }
    }

    /// Fail every command whose first argument (the engine subcommand)
    /// appears in `subcommands`.
    pub fn failing(subcommands: &[&str]) -> Self {
        Self {
            failing: subcommands.iter().map(|s| s.to_string()).collect(),
            ..Self::new()
        }
    }

    /// Sleep inside every command, so overlapping deployments would have
    /// a chance to interleave.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Full start/end event log.
    pub fn events(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    /// Rendered command lines, in execution order.
    pub fn executed(&self) -> Vec<String> {
        self.events()
            .iter()
            .filter_map(|event| event.strip_prefix("start ").map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl CommandExecutor for MockExecutor {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutcome, HookdError> {
        self.log.lock().unwrap().push(format!("start {}", spec));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.log.lock().unwrap().push(format!("end {}", spec));

        let subcommand = spec.args.first().cloned().unwrap_or_default();
        if self.failing.contains(&subcommand) {
            Ok(CommandOutcome {
                success: false,
                exit_code: Some(1),
                stdout: String::new(),
                stderr: format!("simulated failure of {}", subcommand),
            })
        } else {
            Ok(CommandOutcome {
                success: true,
                exit_code: Some(0),
                stdout: format!("{} done", subcommand),
                stderr: String::new(),
            })
        }
    }
}
