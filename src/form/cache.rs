use super::{FormEngine, FormState};
use crate::ast::{AnswerMap, Value};
use ahash::AHashMap;

type SnapshotKey = Vec<(String, Value)>;

/// Memo table for [`FormEngine::resolve_all`], keyed by rule-set version and answer
/// snapshot.
///
/// The cache is a plain value owned by whoever drives re-evaluation; nothing in the
/// engine holds on to it. Entries from an older rule-set version are dropped as soon
/// as an engine with a different version is used.
#[derive(Debug)]
pub struct ResolutionCache {
    version: Option<u64>,
    entries: AHashMap<SnapshotKey, FormState>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl ResolutionCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            version: None,
            entries: AHashMap::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    pub fn get_or_resolve(&mut self, engine: &FormEngine, answers: &AnswerMap) -> &FormState {
        if self.version != Some(engine.version()) {
            self.entries.clear();
            self.version = Some(engine.version());
        }

        let key = snapshot_key(answers);
        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            if self.entries.len() >= self.capacity {
                tracing::debug!(capacity = self.capacity, "resolution cache full; clearing");
                self.entries.clear();
            }
        }
        self.entries
            .entry(key)
            .or_insert_with(|| engine.resolve_all(answers))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new(256)
    }
}

// Answer maps have no defined iteration order, so the key is the sorted entry list.
fn snapshot_key(answers: &AnswerMap) -> SnapshotKey {
    let mut key: SnapshotKey = answers
        .iter()
        .map(|(id, value)| (id.clone(), value.clone()))
        .collect();
    key.sort_by(|a, b| a.0.cmp(&b.0));
    key
}
