//! Server state

use tokio::sync::Mutex;

use crate::deploy::runner::Runner;

/// Server state shared across handlers
pub struct ServerState {
    pub runner: Runner,
    /// Serializes deployments: two triggers racing on the same container
    /// name must never interleave their command sequences.
    pub deploy_lock: Mutex<()>,
    pub success_message: String,
}

impl ServerState {
    pub fn new(runner: Runner, success_message: String) -> Self {
        Self {
            runner,
            deploy_lock: Mutex::new(()),
            success_message,
        }
    }
}
