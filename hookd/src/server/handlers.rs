//! HTTP request handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::server::state::ServerState;
use crate::utils::version_info;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    let version = version_info();
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "hookd".to_string(),
        version: version.version,
    })
}

/// Version response
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub git_hash: String,
    pub build_time: String,
}

/// Version handler
pub async fn version_handler() -> impl IntoResponse {
    let version = version_info();
    Json(VersionResponse {
        version: version.version,
        git_hash: version.git_hash,
        build_time: version.build_time,
    })
}

/// Deploy success response
#[derive(Debug, Serialize)]
pub struct DeployResponse {
    pub status: String,
    pub message: String,
}

/// Deploy trigger handler.
///
/// A body that is not a JSON object is answered with 500, an object whose
/// `event` key is absent or not `"deploy"` with 400. Only a deploy event
/// reaches the runner, and never before the deploy lock is held.
pub async fn deploy_handler(State(state): State<Arc<ServerState>>, body: Bytes) -> Response {
    let payload: Map<String, Value> = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Failed to decode deploy payload: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    info!("Received deploy request: {}", Value::Object(payload.clone()));

    if payload.get("event").and_then(Value::as_str) != Some("deploy") {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let _guard = state.deploy_lock.lock().await;

    match state.runner.deploy().await {
        Ok(()) => Json(DeployResponse {
            status: "success".to_string(),
            message: state.success_message.clone(),
        })
        .into_response(),
        Err(e) => {
            error!("Deployment failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
