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

/// A curation rule attached to a named entity kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: Option<i64>,
    /// Entity kind the rule applies to, e.g. "GENE".
    pub entity: Option<String>,
    /// Rule expression text.
    pub rule: Option<String>,
    pub name: Option<String>,
}

impl Entity for Rule {
    const NAME: &'static str = "rule";
    const PATH: &'static str = "rules";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate(&self) -> Result<(), MissingField> {
        if self.entity.is_none() {
            return Err(MissingField { field: "entity" });
        }
        Ok(())
    }

    fn merge(&mut self, patch: Self) {
        if let Some(entity) = patch.entity {
            self.entity = Some(entity);
        }
        if let Some(rule) = patch.rule {
            self.rule = Some(rule);
        }
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
    }
}
