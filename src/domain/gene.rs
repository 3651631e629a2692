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

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Entity, MissingField};

/// A gene identified by its Entrez id and HUGO symbol.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Gene {
    pub id: Option<i64>,
    /// NCBI Entrez gene identifier.
    pub entrez_gene_id: Option<i32>,
    /// Official HUGO gene symbol, e.g. "BRAF".
    pub hugo_symbol: Option<String>,
    /// HGNC accession, e.g. "HGNC:1097".
    pub hgnc_id: Option<String>,
}

impl Entity for Gene {
    const NAME: &'static str = "gene";
    const PATH: &'static str = "genes";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate(&self) -> Result<(), MissingField> {
        if self.entrez_gene_id.is_none() {
            return Err(MissingField {
                field: "entrezGeneId",
            });
        }
        if self.hugo_symbol.is_none() {
            return Err(MissingField {
                field: "hugoSymbol",
            });
        }
        Ok(())
    }

    fn merge(&mut self, patch: Self) {
        if let Some(entrez_gene_id) = patch.entrez_gene_id {
            self.entrez_gene_id = Some(entrez_gene_id);
        }
        if let Some(hugo_symbol) = patch.hugo_symbol {
            self.hugo_symbol = Some(hugo_symbol);
        }
        if let Some(hgnc_id) = patch.hgnc_id {
            self.hgnc_id = Some(hgnc_id);
        }
    }
}
