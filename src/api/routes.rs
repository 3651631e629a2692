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

//! API route definitions.
//!
//! The route table is the only place an entity type appears: the same
//! generic handlers are wired once per entity under
//! `/api/<entity-plural-kebab-case>`. PUT or PATCH against the collection
//! path has no registered method and therefore answers 405 - the update
//! verbs require a target id.

use axum::{extract::Extension, routing::get, Router};
use std::sync::Arc;

use super::handlers;
use crate::domain::{DrugBrand, DrugSynonym, Entity, Gene, GeneAlias, Info, Rule};
use crate::persistence::DataPersistence;
use crate::store::CurationStores;

/// Build the `/api` router covering every entity collection.
pub fn build_api_router(
    stores: &CurationStores,
    persistence: Option<Arc<DataPersistence>>,
) -> Router {
    Router::new()
        .merge(entity_routes::<DrugBrand>())
        .merge(entity_routes::<DrugSynonym>())
        .merge(entity_routes::<Gene>())
        .merge(entity_routes::<GeneAlias>())
        .merge(entity_routes::<Info>())
        .merge(entity_routes::<Rule>())
        .layer(Extension(stores.drug_brands.clone()))
        .layer(Extension(stores.drug_synonyms.clone()))
        .layer(Extension(stores.genes.clone()))
        .layer(Extension(stores.gene_aliases.clone()))
        .layer(Extension(stores.infos.clone()))
        .layer(Extension(stores.rules.clone()))
        .layer(Extension(persistence))
}

/// Routes for one entity collection.
fn entity_routes<T: Entity>() -> Router {
    let collection = format!("/{}", T::PATH);
    let item = format!("/{}/:id", T::PATH);
    Router::new()
        .route(
            &collection,
            get(handlers::list_entities::<T>).post(handlers::create_entity::<T>),
        )
        .route(
            &item,
            get(handlers::get_entity::<T>)
                .put(handlers::replace_entity::<T>)
                .patch(handlers::partial_update_entity::<T>)
                .delete(handlers::delete_entity::<T>),
        )
}
