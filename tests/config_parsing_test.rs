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

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use curation_server::ServerConfig;

fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("server.yaml");
    std::fs::write(&path, contents).expect("write config");
    (dir, path)
}

#[test]
fn loads_a_complete_yaml_config() {
    let (_dir, path) = write_config(
        "api:\n  host: 127.0.0.1\n  port: 9090\nserver:\n  log_level: debug\n  persist_data: false\n  data_file: /tmp/data.yaml\n",
    );

    let config = ServerConfig::load_from_file(&path).expect("load");
    assert_eq!(config.api.host, "127.0.0.1");
    assert_eq!(config.api.port, 9090);
    assert_eq!(config.server.log_level, "debug");
    assert!(!config.server.persist_data);
    assert_eq!(config.server.data_file, PathBuf::from("/tmp/data.yaml"));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let (_dir, path) = write_config("api:\n  port: 9090\n");

    let config = ServerConfig::load_from_file(&path).expect("load");
    assert_eq!(config.api.host, "0.0.0.0");
    assert_eq!(config.server.log_level, "info");
    assert!(config.server.persist_data);
}

#[test]
fn json_config_is_accepted_as_fallback() {
    let (_dir, path) = write_config(r#"{"api": {"host": "0.0.0.0", "port": 8081}}"#);

    let config = ServerConfig::load_from_file(&path).expect("load");
    assert_eq!(config.api.port, 8081);
}

#[test]
fn unparseable_config_reports_both_yaml_and_json_errors() {
    let (_dir, path) = write_config("api: [this is: {not valid");

    let err = ServerConfig::load_from_file(&path).expect_err("must fail");
    let message = err.to_string();
    assert!(message.contains("YAML error"));
    assert!(message.contains("JSON error"));
}

#[test]
fn missing_file_is_an_error() {
    assert!(ServerConfig::load_from_file("/no/such/config.yaml").is_err());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("server.yaml");

    let mut config = ServerConfig::default();
    config.api.port = 9191;
    config.save_to_file(&path).expect("save");

    let loaded = ServerConfig::load_from_file(&path).expect("load");
    assert_eq!(loaded.api.port, 9191);
}
