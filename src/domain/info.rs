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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Entity, MissingField};

/// Kind of versioning metadata an [`Info`] record tracks.
///
/// Serialized as the symbolic name, e.g. `"NCIT_VERSION"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InfoType {
    NcitVersion,
    GeneLastUpdated,
}

/// A key/value record tracking data-set provenance, such as the NCI
/// Thesaurus version the drug data was imported from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub info_type: Option<InfoType>,
    pub value: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Entity for Info {
    const NAME: &'static str = "info";
    const PATH: &'static str = "infos";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate(&self) -> Result<(), MissingField> {
        if self.info_type.is_none() {
            return Err(MissingField { field: "type" });
        }
        Ok(())
    }

    fn merge(&mut self, patch: Self) {
        if let Some(info_type) = patch.info_type {
            self.info_type = Some(info_type);
        }
        if let Some(value) = patch.value {
            self.value = Some(value);
        }
        if let Some(last_updated) = patch.last_updated {
            self.last_updated = Some(last_updated);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_type_serializes_as_symbolic_name() {
        let json = serde_json::to_string(&InfoType::NcitVersion).expect("serialize");
        assert_eq!(json, "\"NCIT_VERSION\"");
        let parsed: InfoType =
            serde_json::from_str("\"GENE_LAST_UPDATED\"").expect("deserialize");
        assert_eq!(parsed, InfoType::GeneLastUpdated);
    }

    #[test]
    fn type_field_uses_reserved_json_name() {
        let info = Info {
            info_type: Some(InfoType::NcitVersion),
            ..Default::default()
        };
        let value = serde_json::to_value(&info).expect("serialize");
        assert_eq!(value["type"], "NCIT_VERSION");
    }
}
