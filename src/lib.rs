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

pub mod api;
pub mod config;
pub mod domain;
pub mod persistence;
pub mod server;
pub mod store;

// Main exports for library users
pub use config::ServerConfig;
pub use domain::{DrugBrand, DrugSynonym, Entity, Gene, GeneAlias, Info, InfoType, Rule};
pub use persistence::{DataPersistence, DataSet};
pub use server::{build_router, CurationServer};
pub use store::{CurationStores, EntityStore};
