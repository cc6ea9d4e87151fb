use super::engine::DiffEngine;
use super::lcs::EditScript;
use super::types::EditOp;
use crate::constant::DEFAULT_CACHE_CAPACITY;
use std::collections::{HashMap, VecDeque};
use tracing::debug;
use xxhash_rust::xxh64::Xxh64;

struct CachedScript {
    original: String,
    revised: String,
    ops: Vec<EditOp>,
}

/// Memoizes edit scripts per unique (original, revised) pair so views can
/// re-render without rebuilding the LCS table.
pub struct DiffCache {
    capacity: usize,
    entries: HashMap<u64, CachedScript>,
    order: VecDeque<u64>,
    hits: u64,
    misses: u64,
}

impl DiffCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Length-prefixed so that ("ab", "c") and ("a", "bc") differ. The
    /// engine's table ceiling is hashed in too, since it picks the algorithm.
    fn key(engine: &DiffEngine, original: &str, revised: &str) -> u64 {
        let mut hasher = Xxh64::new(0);
        hasher.update(&(engine.max_table_cells() as u64).to_le_bytes());
        hasher.update(&(original.len() as u64).to_le_bytes());
        hasher.update(original.as_bytes());
        hasher.update(revised.as_bytes());
        hasher.digest()
    }

    /// Return the cached script for this pair, computing it on a miss
    pub fn script<'a>(
        &mut self,
        engine: &DiffEngine,
        original: &'a str,
        revised: &'a str,
    ) -> EditScript<'a> {
        let key = Self::key(engine, original, revised);

        if let Some(cached) = self.entries.get(&key)
            && cached.original == original
            && cached.revised == revised
        {
            self.hits += 1;
            return EditScript::from_ops(original, revised, cached.ops.clone());
        }

        self.misses += 1;
        let script = engine.edit_script(original, revised);
        self.insert(key, original, revised, script.ops().to_vec());
        script
    }

    fn insert(&mut self, key: u64, original: &str, revised: &str, ops: Vec<EditOp>) {
        if self.capacity == 0 {
            return;
        }

        let entry = CachedScript {
            original: original.to_string(),
            revised: revised.to_string(),
            ops,
        };
        // A colliding key is overwritten in place and keeps its age
        if self.entries.insert(key, entry).is_some() {
            return;
        }

        self.order.push_back(key);
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                debug!("Evicted diff cache entry {:016x}", oldest);
            }
        }
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
        self.order.clear();
    }
}

impl Default for DiffCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
