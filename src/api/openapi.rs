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

//! OpenAPI documentation for the curation API.
//!
//! The handlers are generic over the entity type, so the document exposes
//! the shared schema components; every collection follows the same CRUD
//! contract described in the info section.

use utoipa::OpenApi;

use super::error::{ErrorDetail, ErrorResponse};
use super::responses::HealthResponse;
use crate::domain::{DrugBrand, DrugSynonym, Gene, GeneAlias, Info, InfoType, Rule};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Curation Server API",
        description = "REST CRUD endpoints over drug and gene curation reference data. \
            Each entity collection lives under /api/<entities> and supports \
            POST, GET, GET/{id}, PUT/{id}, PATCH/{id} (merge-patch), and DELETE/{id}."
    ),
    components(schemas(
        DrugBrand,
        DrugSynonym,
        Gene,
        GeneAlias,
        Info,
        InfoType,
        Rule,
        ErrorResponse,
        ErrorDetail,
        HealthResponse,
    )),
    tags(
        (name = "entities", description = "Entity CRUD endpoints"),
        (name = "operations", description = "Health and operational endpoints")
    )
)]
pub struct ApiDoc;
