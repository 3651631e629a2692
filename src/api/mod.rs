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

//! REST API implementation for the curation server.
//!
//! This module provides the HTTP endpoints for the domain entity
//! collections. Every collection implements the same CRUD contract
//! through one generic handler set.
//!
//! ## API Structure
//!
//! ```text
//! /health                    - Health check (unversioned)
//! /api/drug-brands           - DrugBrand collection
//! /api/drug-synonyms         - DrugSynonym collection
//! /api/genes                 - Gene collection
//! /api/gene-aliases          - GeneAlias collection
//! /api/infos                 - Info collection
//! /api/rules                 - Rule collection
//! /api/docs                  - Swagger UI
//! ```
//!
//! ## Module Organization
//!
//! - `error` - Error taxonomy and HTTP status mapping
//! - `handlers` - Generic CRUD handlers parameterized over the entity type
//! - `routes` - The per-entity route table
//! - `responses` - Operational response types
//! - `openapi` - OpenAPI schema components

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod responses;
pub mod routes;

pub use error::{ApiError, ErrorDetail, ErrorResponse};
pub use handlers::health_check;
pub use openapi::ApiDoc;
pub use responses::HealthResponse;
pub use routes::build_api_router;
