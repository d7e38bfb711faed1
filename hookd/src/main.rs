//! Hookd - Entry Point
//!
//! A minimal webhook listener that refreshes a running container when it
//! receives a deploy trigger.

use std::collections::HashMap;
use std::env;
use std::path::Path;

use hookd::app::options::{AppOptions, DeployOptions, ServerOptions};
use hookd::app::run::run;
use hookd::logs::{init_logging, LogOptions};
use hookd::settings::Settings;
use hookd::utils::version_info;

use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut cli_args: HashMap<String, String> = HashMap::new();

    for arg in args.iter().skip(1) {
        if let Some((key, value)) = arg.split_once('=') {
            // Handle --key=value format
            let clean_key = key.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), value.to_string());
        } else if arg.starts_with("--") {
            // Handle standalone flags like --version
            let clean_key = arg.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), "true".to_string());
        }
    }

    // Print version and exit
    let version = version_info();
    if cli_args.contains_key("version") {
        println!("{}", serde_json::to_string_pretty(&version).unwrap());
        return;
    }

    // Retrieve the settings file, if one was given
    let settings = match cli_args.get("settings") {
        Some(path) => match Settings::load(Path::new(path)).await {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Unable to load settings: {e}");
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    // Initialize logging
    let log_options = LogOptions {
        log_level: settings.log_level.clone(),
        ..Default::default()
    };
    if let Err(e) = init_logging(log_options) {
        println!("Failed to initialize logging: {e}");
    }

    // Run the listener
    let options = AppOptions {
        server: ServerOptions {
            host: settings.server.host.clone(),
            port: settings.server.port,
            success_message: settings.server.success_message.clone(),
        },
        deploy: DeployOptions {
            image: settings.deploy.image.clone(),
            container_name: settings.deploy.container_name.clone(),
            host_port: settings.deploy.host_port,
            container_port: settings.deploy.container_port,
            restart_policy: settings.deploy.restart_policy.clone(),
        },
    };

    info!("Running hookd {} with options: {:?}", version.version, options);
    if let Err(e) = run(options, await_shutdown_signal()).await {
        error!("Failed to run the listener: {e}");
        std::process::exit(1);
    }
}

async fn await_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).unwrap();
        let mut sigint = signal(SignalKind::interrupt()).unwrap();

        tokio::select! {
            _ = sigterm.recv() => {
                info!("SIGTERM received, shutting down...");
            }
            _ = sigint.recv() => {
                info!("SIGINT received, shutting down...");
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl+C received, shutting down...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        info!("Ctrl+C received, shutting down...");
    }
}
