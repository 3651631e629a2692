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
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Curation server configuration: API settings plus server settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Operational settings: logging and data persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// When false, API mutations are still allowed but are not saved to
    /// the data file and do not survive restarts.
    #[serde(default = "default_persist_data")]
    pub persist_data: bool,
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            persist_data: default_persist_data(),
            data_file: default_data_file(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_persist_data() -> bool {
    true
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/curation.yaml")
}

/// HTTP API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let content = fs::read_to_string(path_ref).map_err(|e| {
            anyhow::anyhow!("Failed to read config file {}: {}", path_ref.display(), e)
        })?;

        // Try YAML first, then JSON
        match serde_yaml::from_str::<ServerConfig>(&content) {
            Ok(config) => Ok(config),
            Err(yaml_err) => match serde_json::from_str::<ServerConfig>(&content) {
                Ok(config) => Ok(config),
                Err(json_err) => Err(anyhow::anyhow!(
                    "Failed to parse config file '{}':\n  YAML error: {}\n  JSON error: {}",
                    path_ref.display(),
                    yaml_err,
                    json_err
                )),
            },
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.port == 0 {
            return Err(anyhow::anyhow!(
                "Invalid API port: {} (cannot be 0)",
                self.api.port
            ));
        }

        if self.api.host.is_empty() {
            return Err(anyhow::anyhow!("API host cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = ServerConfig::default();
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.server.log_level, "info");
        assert!(config.server.persist_data);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: ServerConfig =
            serde_yaml::from_str("api:\n  port: 9090\n").expect("valid yaml");
        assert_eq!(config.api.port, 9090);
        assert_eq!(config.api.host, "0.0.0.0");
        assert!(config.server.persist_data);
    }

    #[test]
    fn validate_rejects_port_zero() {
        let config: ServerConfig =
            serde_yaml::from_str("api:\n  port: 0\n").expect("valid yaml");
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_host() {
        let config: ServerConfig =
            serde_yaml::from_str("api:\n  host: \"\"\n").expect("valid yaml");
        assert!(config.validate().is_err());
    }
}
