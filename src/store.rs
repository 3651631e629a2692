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

//! In-process entity storage.
//!
//! One [`EntityStore`] per entity type: an insertion-ordered map guarded
//! by an async lock, plus a monotonically increasing id sequence. The
//! store is the sole owner of entity state; handlers keep nothing between
//! requests. Single operations are atomic under the lock.

use indexmap::IndexMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{DrugBrand, DrugSynonym, Entity, Gene, GeneAlias, Info, Rule};

pub struct EntityStore<T: Entity> {
    records: RwLock<IndexMap<i64, T>>,
    next_id: AtomicI64,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(IndexMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a new entity, assigning the next id from the sequence.
    pub async fn insert(&self, mut entity: T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        entity.set_id(id);
        let mut records = self.records.write().await;
        records.insert(id, entity.clone());
        entity
    }

    /// All entities in insertion order.
    pub async fn list(&self) -> Vec<T> {
        let records = self.records.read().await;
        records.values().cloned().collect()
    }

    pub async fn get(&self, id: i64) -> Option<T> {
        let records = self.records.read().await;
        records.get(&id).cloned()
    }

    pub async fn count(&self) -> usize {
        let records = self.records.read().await;
        records.len()
    }

    /// Full replace: every stored field takes the submitted value,
    /// including fields the payload left null. Returns `None` when no
    /// record with that id exists; this store never upserts.
    pub async fn replace(&self, id: i64, mut entity: T) -> Option<T> {
        let mut records = self.records.write().await;
        if !records.contains_key(&id) {
            return None;
        }
        entity.set_id(id);
        records.insert(id, entity.clone());
        Some(entity)
    }

    /// Merge-patch: only fields present in `patch` overwrite the stored
    /// record. Returns the merged record, or `None` when absent.
    pub async fn merge(&self, id: i64, patch: T) -> Option<T> {
        let mut records = self.records.write().await;
        let stored = records.get_mut(&id)?;
        stored.merge(patch);
        Some(stored.clone())
    }

    /// Remove the entity if present. Idempotent; reports whether a record
    /// was actually removed. Uses `shift_remove` so the remaining records
    /// keep their insertion order.
    pub async fn remove(&self, id: i64) -> bool {
        let mut records = self.records.write().await;
        records.shift_remove(&id).is_some()
    }

    /// Replace the store contents with a restored snapshot, advancing the
    /// id sequence past the highest restored id. Entities without an id
    /// are skipped.
    pub async fn restore(&self, entities: Vec<T>) {
        let mut records = self.records.write().await;
        records.clear();
        let mut max_id = 0;
        for entity in entities {
            if let Some(id) = entity.id() {
                max_id = max_id.max(id);
                records.insert(id, entity);
            }
        }
        self.next_id.store(max_id + 1, Ordering::SeqCst);
    }
}

/// The six entity stores the server serves, shared across handlers and
/// the persistence component.
#[derive(Clone, Default)]
pub struct CurationStores {
    pub drug_brands: Arc<EntityStore<DrugBrand>>,
    pub drug_synonyms: Arc<EntityStore<DrugSynonym>>,
    pub genes: Arc<EntityStore<Gene>>,
    pub gene_aliases: Arc<EntityStore<GeneAlias>>,
    pub infos: Arc<EntityStore<Info>>,
    pub rules: Arc<EntityStore<Rule>>,
}
