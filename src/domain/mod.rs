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

//! Domain entities for the curation data set.
//!
//! Every entity is a flat record with an optional server-assigned id and a
//! handful of scalar fields. The [`Entity`] trait is the single description
//! the generic resource handler needs: id access, required-field
//! validation, and merge-patch semantics. Adding a new entity means adding
//! one struct here and one line in the route table.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub mod drug_brand;
pub mod drug_synonym;
pub mod gene;
pub mod gene_alias;
pub mod info;
pub mod rule;

pub use drug_brand::DrugBrand;
pub use drug_synonym::DrugSynonym;
pub use gene::Gene;
pub use gene_alias::GeneAlias;
pub use info::{Info, InfoType};
pub use rule::Rule;

/// A required field was null or absent on a payload that must carry it.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("field '{field}' must not be null")]
pub struct MissingField {
    pub field: &'static str,
}

/// Description of a persistable domain entity.
///
/// Implementations are plain data structs; all behavior the resource
/// handler relies on is expressed through this trait.
pub trait Entity:
    Clone + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Singular, human-readable name used in log and error messages.
    const NAME: &'static str;

    /// Collection path segment under `/api` (plural kebab-case).
    const PATH: &'static str;

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    /// Check non-null constraints. Runs before any store mutation on
    /// create and full update; partial updates skip it.
    fn validate(&self) -> Result<(), MissingField>;

    /// Merge-patch: fields carried (non-null) by `patch` overwrite the
    /// stored value, absent fields are left untouched. The id is never
    /// merged.
    fn merge(&mut self, patch: Self);
}
