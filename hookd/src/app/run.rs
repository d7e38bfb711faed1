//! Main application run loop

use std::future::Future;
use std::sync::Arc;

use tracing::info;

use crate::app::options::AppOptions;
use crate::deploy::exec::ProcessExecutor;
use crate::deploy::plan::deployment_plan;
use crate::deploy::runner::Runner;
use crate::errors::HookdError;
use crate::server::serve::serve;
use crate::server::state::ServerState;

/// Run the deploy listener until the shutdown signal fires.
pub async fn run(
    options: AppOptions,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), HookdError> {
    info!("Initializing deploy listener...");

    let runner = Runner::new(
        deployment_plan(&options.deploy),
        Arc::new(ProcessExecutor),
    );
    let state = Arc::new(ServerState::new(
        runner,
        options.server.success_message.clone(),
    ));

    let server_handle = serve(&options.server, state, shutdown_signal).await?;

    info!(
        "Listening for deploy triggers for container {}",
        options.deploy.container_name
    );

    match server_handle.await {
        Ok(result) => {
            info!("Shutdown complete");
            result
        }
        Err(e) => Err(HookdError::ShutdownError(e.to_string())),
    }
}
