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

//! Data-set persistence.
//!
//! Snapshots all entity collections to a YAML file after each mutating
//! operation and restores them at startup. Uses atomic writes (temp file
//! + rename) to prevent corruption. Persistence failures never fail the
//! originating HTTP request; they are logged and the in-memory state
//! remains authoritative.

use anyhow::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::{DrugBrand, DrugSynonym, Gene, GeneAlias, Info, Rule};
use crate::store::CurationStores;

/// Serialized snapshot of every entity collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSet {
    #[serde(default)]
    pub drug_brands: Vec<DrugBrand>,
    #[serde(default)]
    pub drug_synonyms: Vec<DrugSynonym>,
    #[serde(default)]
    pub genes: Vec<Gene>,
    #[serde(default)]
    pub gene_aliases: Vec<GeneAlias>,
    #[serde(default)]
    pub infos: Vec<Info>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// Handles persistence of the curation data set to a YAML file.
pub struct DataPersistence {
    data_file_path: PathBuf,
    stores: CurationStores,
}

impl DataPersistence {
    pub fn new(data_file_path: PathBuf, stores: CurationStores) -> Self {
        Self {
            data_file_path,
            stores,
        }
    }

    pub fn path(&self) -> &Path {
        &self.data_file_path
    }

    /// Restore the stores from the data file, if one exists. Missing file
    /// is not an error - the server starts with empty collections.
    pub async fn load(&self) -> Result<()> {
        if !self.data_file_path.exists() {
            debug!(
                "No data file at {}, starting with empty collections",
                self.data_file_path.display()
            );
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.data_file_path)?;
        let data: DataSet = serde_yaml::from_str(&content).map_err(|e| {
            anyhow::anyhow!(
                "Failed to parse data file {}: {e}",
                self.data_file_path.display()
            )
        })?;

        let total = data.drug_brands.len()
            + data.drug_synonyms.len()
            + data.genes.len()
            + data.gene_aliases.len()
            + data.infos.len()
            + data.rules.len();

        self.stores.drug_brands.restore(data.drug_brands).await;
        self.stores.drug_synonyms.restore(data.drug_synonyms).await;
        self.stores.genes.restore(data.genes).await;
        self.stores.gene_aliases.restore(data.gene_aliases).await;
        self.stores.infos.restore(data.infos).await;
        self.stores.rules.restore(data.rules).await;

        info!(
            "Restored {total} record(s) from {}",
            self.data_file_path.display()
        );
        Ok(())
    }

    /// Snapshot every collection and write it atomically.
    pub async fn save(&self) -> Result<()> {
        let data = DataSet {
            drug_brands: self.stores.drug_brands.list().await,
            drug_synonyms: self.stores.drug_synonyms.list().await,
            genes: self.stores.genes.list().await,
            gene_aliases: self.stores.gene_aliases.list().await,
            infos: self.stores.infos.list().await,
            rules: self.stores.rules.list().await,
        };

        let content = serde_yaml::to_string(&data)?;
        self.write_atomic(&content)?;
        debug!("Persisted data set to {}", self.data_file_path.display());
        Ok(())
    }

    /// Write to a temp file in the target directory, then rename over the
    /// destination so a crash mid-write never leaves a truncated file.
    fn write_atomic(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.data_file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let temp_path = self.data_file_path.with_extension("yaml.tmp");
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, &self.data_file_path)?;
        Ok(())
    }
}
