//! Settings file management

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::HookdError;
use crate::logs::LogLevel;

/// Listener settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerSettings,

    /// Deployment configuration
    #[serde(default)]
    pub deploy: DeploySettings,
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults when the
    /// file does not exist.
    pub async fn load(path: &Path) -> Result<Self, HookdError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(HookdError::ConfigError(format!(
                    "unable to read settings file {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Message returned in the success response body
    #[serde(default = "default_success_message")]
    pub success_message: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9000
}

fn default_success_message() -> String {
    "部署成功".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            success_message: default_success_message(),
        }
    }
}

/// Deployment settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploySettings {
    /// Image to pull and run
    #[serde(default = "default_image")]
    pub image: String,

    /// Name given to the managed container
    #[serde(default = "default_container_name")]
    pub container_name: String,

    /// Host port published to the container
    #[serde(default = "default_published_port")]
    pub host_port: u16,

    /// Port exposed inside the container
    #[serde(default = "default_published_port")]
    pub container_port: u16,

    /// Restart policy passed to the container engine
    #[serde(default = "default_restart_policy")]
    pub restart_policy: String,
}

fn default_image() -> String {
    "jhinih/text-achobeta-forge:latest".to_string()
}

fn default_container_name() -> String {
    "text-achobeta-forge-app".to_string()
}

fn default_published_port() -> u16 {
    8080
}

fn default_restart_policy() -> String {
    "unless-stopped".to_string()
}

impl Default for DeploySettings {
    fn default() -> Self {
        Self {
            image: default_image(),
            container_name: default_container_name(),
            host_port: default_published_port(),
            container_port: default_published_port(),
            restart_policy: default_restart_policy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_yields_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.deploy.container_name, "text-achobeta-forge-app");
        assert_eq!(settings.deploy.restart_policy, "unless-stopped");
    }

    #[test]
    fn test_partial_override() {
        let settings: Settings =
            serde_json::from_str(r#"{"server": {"port": 9100}, "log_level": "debug"}"#).unwrap();
        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.log_level, crate::logs::LogLevel::Debug);
    }
}
