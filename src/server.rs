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

use anyhow::Result;
use axum::{routing::get, Router};
use log::{info, warn};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::config::ServerConfig;
use crate::persistence::DataPersistence;
use crate::store::CurationStores;

pub struct CurationServer {
    stores: CurationStores,
    host: String,
    port: u16,
    config_file_path: Option<String>,
    persistence: Option<Arc<DataPersistence>>,
}

impl CurationServer {
    /// Create a new CurationServer from a configuration file
    pub async fn new(config_path: PathBuf, port_override: Option<u16>) -> Result<Self> {
        let config = ServerConfig::load_from_file(&config_path)?;
        config.validate()?;

        let stores = CurationStores::default();

        // Persistence is only enabled when the data file location is
        // writable; otherwise the API still serves mutations but nothing
        // survives a restart.
        let persistence = if config.server.persist_data {
            if Self::check_write_access(&config.server.data_file) {
                let persistence = Arc::new(DataPersistence::new(
                    config.server.data_file.clone(),
                    stores.clone(),
                ));
                persistence.load().await?;
                info!("Data persistence ENABLED. API modifications will be saved to data file.");
                Some(persistence)
            } else {
                warn!(
                    "Data file {} is not writable. Persistence disabled.",
                    config.server.data_file.display()
                );
                warn!("API modifications will not persist across restarts.");
                None
            }
        } else {
            info!("Persistence disabled by configuration (persist_data: false).");
            warn!("API modifications will not persist across restarts.");
            None
        };

        Ok(Self {
            stores,
            host: config.api.host,
            port: port_override.unwrap_or(config.api.port),
            config_file_path: Some(config_path.to_string_lossy().to_string()),
            persistence,
        })
    }

    /// Create a CurationServer from pre-built stores (programmatic use).
    pub fn from_stores(stores: CurationStores, host: String, port: u16) -> Self {
        Self {
            stores,
            host,
            port,
            config_file_path: None,
            persistence: None,
        }
    }

    /// Check if we can write at the data file location, creating the
    /// parent directory if needed.
    fn check_write_access(path: &Path) -> bool {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && std::fs::create_dir_all(parent).is_err() {
                return false;
            }
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .is_ok()
    }

    #[allow(clippy::print_stdout)]
    pub async fn run(self) -> Result<()> {
        println!("Starting Curation Server");
        if let Some(config_file) = &self.config_file_path {
            println!("  Config file: {config_file}");
        }
        println!("  API Port: {}", self.port);
        println!(
            "  Log level: {}",
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
        );
        info!("Initializing Curation Server");

        let app = build_router(&self.stores, self.persistence.clone());

        let addr = format!("{}:{}", self.host, self.port);
        info!("Starting web API on {addr}");
        info!("API available at http://{addr}/api/");
        info!("Swagger UI available at http://{addr}/api/docs/");

        let listener = tokio::net::TcpListener::bind(&addr).await?;

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await?;

        info!("Shutting down Curation Server");
        if let Some(persistence) = &self.persistence {
            persistence.save().await?;
        }

        Ok(())
    }
}

/// Build the complete application router: health endpoint, entity
/// collections under `/api`, and the Swagger UI.
pub fn build_router(stores: &CurationStores, persistence: Option<Arc<DataPersistence>>) -> Router {
    let openapi = api::ApiDoc::openapi();

    Router::new()
        // Health check at root level (operational endpoint, not under /api)
        .route("/health", get(api::health_check))
        .nest("/api", api::build_api_router(stores, persistence))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", openapi))
        .layer(CorsLayer::permissive())
}
