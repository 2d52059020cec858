use crate::types::{signal_key, SignalRecord};
use dashmap::DashMap;
use std::sync::Arc;

/// Latest signal per (pair, timeframe).
///
/// Keys are `"{PAIR}_{timeframe}"`. Inserts replace any previous record for
/// the key, so the table only ever holds the most recent alert.
pub struct SignalCache {
    data: DashMap<String, SignalRecord>,
}

impl SignalCache {
    /// Create a new, empty cache.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Store a record under its key, returning the record it replaced.
    pub fn upsert(&self, record: SignalRecord) -> Option<SignalRecord> {
        self.data.insert(record.key(), record)
    }

    /// Look up the latest record for a pair and timeframe.
    pub fn get(&self, pair: &str, timeframe: &str) -> Option<SignalRecord> {
        self.data
            .get(&signal_key(pair, timeframe))
            .map(|entry| entry.value().clone())
    }

    /// Get the number of cached keys.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for SignalCache {
    fn default() -> Self {
        Self {
            data: DashMap::new(),
        }
    }
}
