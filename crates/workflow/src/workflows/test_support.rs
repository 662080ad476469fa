//! In-crate test doubles for the ports.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pig_domain::session::{DieFace, PlayerIdentity, Session};
use pig_domain::statistics::{AggregateSlot, CompletionAggregate};

use crate::errors::WorkflowError;
use crate::ports::{DiceRoller, KeyedStore, WorkflowResult};

pub type MockSessionStore = MockStore<PlayerIdentity, Session>;
pub type MockAggregateStore = MockStore<AggregateSlot, CompletionAggregate>;

#[derive(Clone)]
pub struct MockStore<K, V> {
    records: Arc<Mutex<HashMap<K, V>>>,
}

impl<K, V> MockStore<K, V> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<K, V> KeyedStore for MockStore<K, V>
where
    K: Clone + Eq + Hash + fmt::Display + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    type Key = K;
    type Record = V;

    fn exists(&self, key: &K) -> bool {
        self.records.lock().unwrap().contains_key(key)
    }

    fn get(&self, key: &K) -> Option<V> {
        self.records.lock().unwrap().get(key).cloned()
    }

    fn create(&self, key: &K, record: V) -> WorkflowResult<()> {
        let mut records = self.records.lock().unwrap();
        if records.contains_key(key) {
            return Err(WorkflowError::conflict(format!("{} already exists", key)));
        }
        records.insert(key.clone(), record);
        Ok(())
    }

    fn mutate<F>(&self, key: &K, mutation: F) -> WorkflowResult<V>
    where
        F: FnOnce(Option<&V>) -> WorkflowResult<V>,
    {
        let mut records = self.records.lock().unwrap();
        let updated = mutation(records.get(key))?;
        records.insert(key.clone(), updated.clone());
        Ok(updated)
    }
}

/// Aggregate store whose writes fail a fixed number of times before they
/// start reaching the wrapped store.
#[derive(Clone)]
pub struct FlakyAggregateStore {
    inner: MockAggregateStore,
    failures_left: Arc<AtomicUsize>,
}

impl FlakyAggregateStore {
    pub fn failing(times: usize) -> Self {
        Self {
            inner: MockAggregateStore::new(),
            failures_left: Arc::new(AtomicUsize::new(times)),
        }
    }

    fn fail(&self, operation: &str) -> WorkflowResult<()> {
        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if failing {
            Err(WorkflowError::store(operation, "aggregate store unavailable"))
        } else {
            Ok(())
        }
    }
}

impl KeyedStore for FlakyAggregateStore {
    type Key = AggregateSlot;
    type Record = CompletionAggregate;

    fn exists(&self, key: &AggregateSlot) -> bool {
        self.inner.exists(key)
    }

    fn get(&self, key: &AggregateSlot) -> Option<CompletionAggregate> {
        self.inner.get(key)
    }

    fn create(&self, key: &AggregateSlot, record: CompletionAggregate) -> WorkflowResult<()> {
        self.fail("create")?;
        self.inner.create(key, record)
    }

    fn mutate<F>(&self, key: &AggregateSlot, mutation: F) -> WorkflowResult<CompletionAggregate>
    where
        F: FnOnce(Option<&CompletionAggregate>) -> WorkflowResult<CompletionAggregate>,
    {
        self.fail("mutate")?;
        self.inner.mutate(key, mutation)
    }
}

#[derive(Clone)]
pub struct ScriptedDice {
    faces: Arc<Mutex<VecDeque<DieFace>>>,
}

impl ScriptedDice {
    pub fn new(faces: &[u8]) -> Self {
        let faces = faces
            .iter()
            .map(|value| DieFace::new(*value).unwrap())
            .collect();
        Self {
            faces: Arc::new(Mutex::new(faces)),
        }
    }
}

impl DiceRoller for ScriptedDice {
    fn roll_die(&self) -> DieFace {
        self.faces
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted dice ran out of faces")
    }
}

pub fn identity(name: &str) -> PlayerIdentity {
    PlayerIdentity::new(name).unwrap()
}
