// Copyright 2025 The Curation Project Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Allow println! in main.rs for CLI user-facing output (validate command)
#![allow(clippy::print_stdout)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

use curation_server::{CurationServer, ServerConfig};

#[derive(Parser)]
#[command(name = "curation-server")]
#[command(about = "Standalone REST server for drug and gene curation reference data")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config/server.yaml", global = true)]
    config: PathBuf,

    /// Override the server port
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server (default if no subcommand specified)
    Run {
        /// Path to the configuration file
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,

        /// Override the server port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate a configuration file without starting the server
    Validate {
        /// Path to the configuration file to validate
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { config, port }) => run_server(config, port).await,
        Some(Commands::Validate { config }) => validate_config(config),
        None => {
            // Default behavior: run the server
            run_server(cli.config, cli.port).await
        }
    }
}

/// Run the Curation Server
async fn run_server(config_path: PathBuf, port_override: Option<u16>) -> Result<()> {
    // Load .env file if it exists, looked up next to the config file
    let env_file_loaded = if let Some(config_dir) = config_path.parent() {
        let env_file = config_dir.join(".env");
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(_) => true,
                Err(e) => {
                    eprintln!("Warning: Failed to load .env file: {e}");
                    false
                }
            }
        } else {
            false
        }
    } else {
        false
    };

    // Check if config file exists, create default if it doesn't
    let config = if !config_path.exists() {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = ServerConfig::default();
        default_config.save_to_file(&config_path)?;

        init_logging(&default_config.server.log_level);
        warn!(
            "Config file '{}' not found. Created default configuration.",
            config_path.display()
        );

        default_config
    } else {
        let config = ServerConfig::load_from_file(&config_path)?;
        init_logging(&config.server.log_level);
        config
    };

    info!("Starting Curation Server");
    debug!("Debug logging is enabled");

    if env_file_loaded {
        info!("Loaded environment variables from .env file");
    }

    info!("Config file: {}", config_path.display());

    let final_port = port_override.unwrap_or(config.api.port);
    info!("Port: {final_port}");

    let server = CurationServer::new(config_path, port_override).await?;
    server.run().await?;

    Ok(())
}

/// Initialize the log facade. `RUST_LOG` takes precedence over the
/// configured level.
fn init_logging(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Validate a configuration file
fn validate_config(config_path: PathBuf) -> Result<()> {
    println!("Validating configuration: {}", config_path.display());
    println!();

    if !config_path.exists() {
        println!(
            "[ERROR] Configuration file not found: {}",
            config_path.display()
        );
        std::process::exit(1);
    }

    match ServerConfig::load_from_file(&config_path) {
        Ok(config) => match config.validate() {
            Ok(()) => {
                println!("[OK] Configuration file is valid");
                println!();
                println!("Summary:");
                println!("  Host: {}", config.api.host);
                println!("  Port: {}", config.api.port);
                println!("  Log level: {}", config.server.log_level);
                println!("  Persist data: {}", config.server.persist_data);
                println!("  Data file: {}", config.server.data_file.display());
                Ok(())
            }
            Err(e) => {
                println!("[ERROR] Configuration is invalid:");
                println!("  {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            println!("[ERROR] Configuration is invalid:");
            println!("  {e}");
            std::process::exit(1);
        }
    }
}
