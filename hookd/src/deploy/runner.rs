//! Deployment runner

use std::sync::Arc;

use tracing::{debug, info};

use crate::deploy::exec::CommandExecutor;
use crate::deploy::plan::CommandSpec;
use crate::errors::HookdError;

/// Executes the deployment plan strictly in order.
pub struct Runner {
    plan: Vec<CommandSpec>,
    executor: Arc<dyn CommandExecutor>,
}

impl Runner {
    pub fn new(plan: Vec<CommandSpec>, executor: Arc<dyn CommandExecutor>) -> Self {
        Self { plan, executor }
    }

    /// Run the refresh sequence.
    ///
    /// The first non-tolerant command that exits non-zero aborts the
    /// remaining steps and surfaces the command line plus its captured
    /// stderr. Earlier side effects are not rolled back.
    pub async fn deploy(&self) -> Result<(), HookdError> {
        for step in &self.plan {
            info!("Executing command: {}", step);

            let outcome = self.executor.run(step).await?;

            if !outcome.success && !step.tolerant {
                return Err(HookdError::DeployError {
                    command: step.to_string(),
                    stderr: outcome.stderr,
                });
            }

            if !outcome.success {
                debug!(
                    "Tolerated failure (exit {:?}) of command: {}",
                    outcome.exit_code, step
                );
            }

            info!("Command output: {}", outcome.stdout.trim_end());
        }

        info!("Deployment sequence completed");
        Ok(())
    }
}
