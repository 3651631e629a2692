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

//! Generic resource handlers.
//!
//! One set of handler functions implements the CRUD contract for every
//! entity type; the concrete type is picked by the route table. Each
//! handler runs its guards before touching the store, performs at most
//! one store mutation, and holds no state between requests.

use axum::{
    extract::{Extension, Path, Query},
    http::{header, StatusCode},
    response::Json,
};
use serde::Deserialize;
use std::cmp::Ordering;
use std::sync::Arc;

use super::error::ApiError;
use super::responses::HealthResponse;
use crate::domain::Entity;
use crate::persistence::DataPersistence;
use crate::store::EntityStore;

/// Optional sort specification for collection reads: `?sort=field,dir`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    sort: Option<String>,
}

/// Helper to persist the data set after a successful mutation.
/// Logs errors but does not fail the request - persistence failures are non-fatal.
pub async fn persist_after_operation(
    persistence: &Option<Arc<DataPersistence>>,
    operation: &str,
) {
    if let Some(persistence) = persistence {
        if let Err(e) = persistence.save().await {
            log::error!("Failed to persist data after {operation}: {e}");
        }
    }
}

/// Check server health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Create a new entity. Rejects payloads that already carry an id or
/// miss a required field; on success echoes the persisted entity with
/// its assigned id and a `Location` header.
pub async fn create_entity<T: Entity>(
    Extension(store): Extension<Arc<EntityStore<T>>>,
    Extension(persistence): Extension<Option<Arc<DataPersistence>>>,
    Json(entity): Json<T>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<T>), ApiError> {
    if entity.id().is_some() {
        return Err(ApiError::IdAlreadySet { entity: T::NAME });
    }
    entity.validate().map_err(|e| ApiError::MissingField {
        entity: T::NAME,
        field: e.field,
    })?;

    let created = store.insert(entity).await;
    let id = created.id().unwrap_or_default();
    log::info!("Created {} with id {id}", T::NAME);

    persist_after_operation(&persistence, "create").await;

    let location = format!("/api/{}/{id}", T::PATH);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// List all entities, in insertion order unless a sort parameter names a
/// field to order by.
pub async fn list_entities<T: Entity>(
    Extension(store): Extension<Arc<EntityStore<T>>>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<T>> {
    let mut items = store.list().await;
    if let Some(sort) = query.sort.as_deref() {
        let (field, descending) = parse_sort(sort);
        sort_by_field(&mut items, field, descending);
    }
    Json(items)
}

/// Get a single entity by id.
pub async fn get_entity<T: Entity>(
    Extension(store): Extension<Arc<EntityStore<T>>>,
    Path(id): Path<i64>,
) -> Result<Json<T>, ApiError> {
    store
        .get(id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound { entity: T::NAME, id })
}

/// Full update. The stored record is replaced wholesale: fields the
/// payload leaves null become null. Never creates; an id that was never
/// assigned is rejected the same way as a mismatched one.
pub async fn replace_entity<T: Entity>(
    Extension(store): Extension<Arc<EntityStore<T>>>,
    Extension(persistence): Extension<Option<Arc<DataPersistence>>>,
    Path(id): Path<i64>,
    Json(entity): Json<T>,
) -> Result<Json<T>, ApiError> {
    let body_id = entity.id().ok_or(ApiError::MissingId { entity: T::NAME })?;
    if body_id != id {
        return Err(ApiError::IdMismatch {
            entity: T::NAME,
            body_id,
            path_id: id,
        });
    }
    entity.validate().map_err(|e| ApiError::MissingField {
        entity: T::NAME,
        field: e.field,
    })?;

    let replaced = store
        .replace(id, entity)
        .await
        .ok_or(ApiError::UnknownId { entity: T::NAME, id })?;
    log::info!("Replaced {} {id}", T::NAME);

    persist_after_operation(&persistence, "replace").await;

    Ok(Json(replaced))
}

/// Merge-patch. Only fields present in the payload overwrite stored
/// values; required-field validation is skipped since absent fields keep
/// their stored value.
pub async fn partial_update_entity<T: Entity>(
    Extension(store): Extension<Arc<EntityStore<T>>>,
    Extension(persistence): Extension<Option<Arc<DataPersistence>>>,
    Path(id): Path<i64>,
    Json(patch): Json<T>,
) -> Result<Json<T>, ApiError> {
    let body_id = patch.id().ok_or(ApiError::MissingId { entity: T::NAME })?;
    if body_id != id {
        return Err(ApiError::IdMismatch {
            entity: T::NAME,
            body_id,
            path_id: id,
        });
    }

    let merged = store
        .merge(id, patch)
        .await
        .ok_or(ApiError::UnknownId { entity: T::NAME, id })?;
    log::info!("Patched {} {id}", T::NAME);

    persist_after_operation(&persistence, "partial update").await;

    Ok(Json(merged))
}

/// Delete an entity. Responds 204 whether or not the record existed.
pub async fn delete_entity<T: Entity>(
    Extension(store): Extension<Arc<EntityStore<T>>>,
    Extension(persistence): Extension<Option<Arc<DataPersistence>>>,
    Path(id): Path<i64>,
) -> StatusCode {
    if store.remove(id).await {
        log::info!("Deleted {} {id}", T::NAME);
        persist_after_operation(&persistence, "delete").await;
    }
    StatusCode::NO_CONTENT
}

/// Parse `field,dir` into the field name and a descending flag.
fn parse_sort(sort: &str) -> (&str, bool) {
    match sort.split_once(',') {
        Some((field, dir)) => (field.trim(), dir.trim().eq_ignore_ascii_case("desc")),
        None => (sort.trim(), false),
    }
}

/// Stable sort by a named JSON field. Records where the field is null or
/// unknown sort first; an unknown field therefore leaves insertion order
/// untouched.
fn sort_by_field<T: serde::Serialize>(items: &mut [T], field: &str, descending: bool) {
    items.sort_by(|a, b| {
        let ord = compare_values(&field_value(a, field), &field_value(b, field));
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
}

fn field_value<T: serde::Serialize>(item: &T, field: &str) -> serde_json::Value {
    serde_json::to_value(item)
        .ok()
        .and_then(|v| v.get(field).cloned())
        .unwrap_or(serde_json::Value::Null)
}

fn compare_values(a: &serde_json::Value, b: &serde_json::Value) -> Ordering {
    use serde_json::Value;
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gene;

    fn gene(entrez: i32, symbol: &str) -> Gene {
        Gene {
            entrez_gene_id: Some(entrez),
            hugo_symbol: Some(symbol.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn parse_sort_with_and_without_direction() {
        assert_eq!(parse_sort("id,desc"), ("id", true));
        assert_eq!(parse_sort("id,asc"), ("id", false));
        assert_eq!(parse_sort("hugoSymbol"), ("hugoSymbol", false));
        assert_eq!(parse_sort("id, DESC"), ("id", true));
    }

    #[test]
    fn sort_by_numeric_field() {
        let mut items = vec![gene(30, "c"), gene(10, "a"), gene(20, "b")];
        sort_by_field(&mut items, "entrezGeneId", false);
        let order: Vec<_> = items.iter().filter_map(|g| g.entrez_gene_id).collect();
        assert_eq!(order, vec![10, 20, 30]);

        sort_by_field(&mut items, "entrezGeneId", true);
        let order: Vec<_> = items.iter().filter_map(|g| g.entrez_gene_id).collect();
        assert_eq!(order, vec![30, 20, 10]);
    }

    #[test]
    fn sort_by_string_field() {
        let mut items = vec![gene(1, "TP53"), gene(2, "BRAF"), gene(3, "EGFR")];
        sort_by_field(&mut items, "hugoSymbol", false);
        let order: Vec<_> = items.iter().filter_map(|g| g.hugo_symbol.clone()).collect();
        assert_eq!(order, vec!["BRAF", "EGFR", "TP53"]);
    }

    #[test]
    fn sort_by_unknown_field_keeps_insertion_order() {
        let mut items = vec![gene(3, "c"), gene(1, "a"), gene(2, "b")];
        sort_by_field(&mut items, "noSuchField", false);
        let order: Vec<_> = items.iter().filter_map(|g| g.entrez_gene_id).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn null_fields_sort_first() {
        let mut items = vec![gene(1, "a"), Gene::default(), gene(2, "b")];
        sort_by_field(&mut items, "entrezGeneId", false);
        assert_eq!(items[0].entrez_gene_id, None);
    }
}
