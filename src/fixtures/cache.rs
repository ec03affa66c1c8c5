use std::collections::HashMap;
use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::core::traits::VariableStore;
use crate::core::{entity_id, EntityKind, FixtureError, Result};

/// Store keys for fixtures live under this prefix so they never collide
/// with other run variables such as the auth token.
pub const FIXTURE_KEY_PREFIX: &str = "fixture:";

/// Tagged entity payload as held in the variable store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedFixture {
    pub kind: EntityKind,
    pub payload: Value,
}

impl CachedFixture {
    pub fn id(&self) -> Option<String> {
        entity_id(&self.payload)
    }
}

/// Run-scoped cache of named fixtures.
///
/// A name maps to at most one live backend entity. The `(kind, id) -> name`
/// index is filled when an entity is created, which is how a delete by id
/// finds the entry to clear. Ids are only unique within a kind. `created` keeps names in creation order so teardown
/// can walk it backwards.
pub struct FixtureCache<S: VariableStore> {
    store: S,
    ids: HashMap<(EntityKind, String), String>,
    created: Vec<String>,
}

impl<S: VariableStore> FixtureCache<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            ids: HashMap::new(),
            created: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn key(name: &str) -> String {
        format!("{}{}", FIXTURE_KEY_PREFIX, name)
    }

    /// Cached entry for `name`, if any
    pub fn get(&self, name: &str) -> Option<CachedFixture> {
        let value = self.store.get(&Self::key(name))?;
        match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(fixture = %name, error = %e, "Ignoring undecodable cache entry");
                None
            }
        }
    }

    /// Cached payload for `name`, if any
    pub fn payload(&self, name: &str) -> Option<Value> {
        self.get(name).map(|entry| entry.payload)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Fixture name that created the `kind` entity with this id
    pub fn name_for_id(&self, kind: EntityKind, id: &str) -> Option<&str> {
        self.ids
            .get(&(kind, id.to_string()))
            .map(String::as_str)
    }

    /// Names of live fixtures, oldest first
    pub fn created_names(&self) -> &[String] {
        &self.created
    }

    pub fn len(&self) -> usize {
        self.created.len()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }

    /// Return the payload cached under `name`, or run `creator` and cache
    /// what it returns.
    ///
    /// `creator` runs at most once per name until the entry is cleared. A
    /// failing creator leaves no entry behind, so the next call retries.
    pub async fn get_or_create<F, Fut>(
        &mut self,
        kind: EntityKind,
        name: &str,
        creator: F,
    ) -> Result<Value>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value>>,
    {
        if name.is_empty() {
            return Err(FixtureError::validation("Fixture name must not be empty"));
        }

        if let Some(cached) = self.get(name) {
            if cached.kind != kind {
                warn!(
                    fixture = %name,
                    cached_kind = %cached.kind,
                    requested_kind = %kind,
                    "Fixture name reused for a different entity kind"
                );
            }
            debug!(fixture = %name, kind = %cached.kind, "Reusing cached fixture");
            return Ok(cached.payload);
        }

        info!(fixture = %name, kind = %kind, "Creating fixture");

        let payload = match creator().await {
            Ok(payload) => payload,
            Err(e) => {
                error!(fixture = %name, kind = %kind, error = %e, "Fixture creation failed");
                return Err(e);
            }
        };

        if payload.is_null() {
            return Err(FixtureError::invalid_payload(format!(
                "{} '{}' was created but the backend returned no entity",
                kind, name
            )));
        }

        let entry = CachedFixture {
            kind,
            payload: payload.clone(),
        };
        self.store.set(&Self::key(name), serde_json::to_value(&entry)?);

        match entry.id() {
            Some(id) => {
                info!(fixture = %name, kind = %kind, id = %id, "Fixture created");
                self.ids.insert((kind, id), name.to_string());
            }
            None => warn!(fixture = %name, kind = %kind, "Created fixture has no id"),
        }
        self.created.push(name.to_string());

        Ok(payload)
    }

    /// Delete the `kind` entity `id` through `deleter` and clear its cache
    /// entry.
    ///
    /// An empty id is a no-op: fixtures that were never created need no
    /// teardown. Deleter failures propagate and leave the entry in place.
    pub async fn delete<F, Fut>(&mut self, kind: EntityKind, id: &str, deleter: F) -> Result<()>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        if id.is_empty() {
            warn!(kind = %kind, "No entity ID provided for deletion");
            return Ok(());
        }

        if let Err(e) = deleter(id.to_string()).await {
            error!(kind = %kind, id = %id, error = %e, "Fixture deletion failed");
            return Err(e);
        }

        match self.ids.get(&(kind, id.to_string())).cloned() {
            Some(name) => {
                self.forget(&name);
                info!(fixture = %name, kind = %kind, id = %id, "Fixture deleted");
            }
            None => info!(kind = %kind, id = %id, "Entity deleted (not cached)"),
        }

        Ok(())
    }

    /// Drop the entry for `name` without touching the backend
    pub fn forget(&mut self, name: &str) -> Option<CachedFixture> {
        let removed = self
            .store
            .delete(&Self::key(name))
            .and_then(|value| serde_json::from_value::<CachedFixture>(value).ok());

        self.ids.retain(|_, owner| owner.as_str() != name);
        self.created.retain(|created| created.as_str() != name);

        removed
    }
}
