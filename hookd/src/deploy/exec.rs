//! Command execution seam

use async_trait::async_trait;
use tokio::process::Command;

use crate::deploy::plan::CommandSpec;
use crate::errors::HookdError;

/// Outcome of one executed command
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs one command and captures its output.
///
/// The runner only talks to the container engine through this trait so
/// tests can substitute a recording mock.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutcome, HookdError>;
}

/// Executor backed by real child processes
pub struct ProcessExecutor;

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutcome, HookdError> {
        // output() waits for exit with stdout/stderr captured, not streamed
        let output = Command::new(&spec.program).args(&spec.args).output().await?;

        Ok(CommandOutcome {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
