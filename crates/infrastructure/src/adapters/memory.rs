//! In-memory keyed store adapter.
//!
//! [`InMemoryStore`] implements the [`KeyedStore`] port over a hash map
//! guarded by a single reader-writer lock. Every mutation holds the write
//! lock for its whole read-modify-write cycle, so concurrent mutations of a
//! key are serialized and no update is lost.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;
use pig_domain::session::{PlayerIdentity, Session};
use pig_domain::statistics::{AggregateSlot, CompletionAggregate};
use pig_workflow::{KeyedStore, WorkflowError, WorkflowResult};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::errors::InfraError;

/// Store of per-player sessions.
pub type InMemorySessionStore = InMemoryStore<PlayerIdentity, Session>;

/// Store of completion aggregates.
pub type InMemoryAggregateStore = InMemoryStore<AggregateSlot, CompletionAggregate>;

// =============================================================================
// InMemoryStore
// =============================================================================

/// Thread-safe keyed store held in process memory.
///
/// Clones share the same underlying map.
///
/// # Examples
///
/// ```
/// use pig_infrastructure::adapters::InMemorySessionStore;
/// use pig_domain::session::{PlayerIdentity, Session};
/// use pig_workflow::KeyedStore;
///
/// let store = InMemorySessionStore::new();
/// let alice = PlayerIdentity::new("alice").unwrap();
///
/// store.create(&alice, Session::new()).unwrap();
/// assert!(store.exists(&alice));
/// ```
pub struct InMemoryStore<K, V> {
    records: Arc<RwLock<FxHashMap<K, V>>>,
}

impl<K, V> InMemoryStore<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(FxHashMap::default())),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl<K, V> Default for InMemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for InMemoryStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<K, V> fmt::Debug for InMemoryStore<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("InMemoryStore")
            .field("len", &self.len())
            .finish()
    }
}

impl<K, V> InMemoryStore<K, V>
where
    K: fmt::Display,
    V: Serialize,
{
    /// Serializes every record into a JSON object keyed by the record key's
    /// display form. Keys are emitted in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`InfraError::Serialization`] if a record cannot be encoded.
    pub fn export_json(&self) -> Result<serde_json::Value, InfraError> {
        let records = self.records.read();
        let entries = records
            .iter()
            .map(|(key, record)| {
                serde_json::to_value(record)
                    .map(|value| (key.to_string(), value))
                    .map_err(InfraError::from)
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(serde_json::Value::Object(entries.into_iter().collect()))
    }
}

// =============================================================================
// KeyedStore Implementation
// =============================================================================

impl<K, V> KeyedStore for InMemoryStore<K, V>
where
    K: Clone + Eq + Hash + fmt::Display + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    type Key = K;
    type Record = V;

    fn exists(&self, key: &K) -> bool {
        self.records.read().contains_key(key)
    }

    fn get(&self, key: &K) -> Option<V> {
        self.records.read().get(key).cloned()
    }

    fn create(&self, key: &K, record: V) -> WorkflowResult<()> {
        let mut records = self.records.write();
        if records.contains_key(key) {
            tracing::debug!(key = %key, "create rejected, key already present");
            return Err(WorkflowError::conflict(format!("record '{key}' already exists")));
        }
        records.insert(key.clone(), record);
        tracing::trace!(key = %key, "record created");
        Ok(())
    }

    fn mutate<F>(&self, key: &K, mutation: F) -> WorkflowResult<V>
    where
        F: FnOnce(Option<&V>) -> WorkflowResult<V>,
    {
        let mut records = self.records.write();
        match mutation(records.get(key)) {
            Ok(updated) => {
                records.insert(key.clone(), updated.clone());
                tracing::trace!(key = %key, "mutation committed");
                Ok(updated)
            }
            Err(error) => {
                tracing::debug!(key = %key, error = %error, "mutation rejected");
                Err(error)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
