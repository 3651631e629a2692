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

/// A branded (trade) name under which a drug is marketed in a region.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrugBrand {
    pub id: Option<i64>,
    /// Brand name, e.g. "Tafinlar".
    pub name: Option<String>,
    /// Market region the brand name applies to.
    pub region: Option<String>,
}

impl Entity for DrugBrand {
    const NAME: &'static str = "drug brand";
    const PATH: &'static str = "drug-brands";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate(&self) -> Result<(), MissingField> {
        if self.name.is_none() {
            return Err(MissingField { field: "name" });
        }
        Ok(())
    }

    fn merge(&mut self, patch: Self) {
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(region) = patch.region {
            self.region = Some(region);
        }
    }
}
