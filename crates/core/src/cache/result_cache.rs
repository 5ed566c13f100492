use lru::LruCache;
use std::num::NonZeroUsize;

use crate::types::EvaluationResult;

/// In-memory LRU of completed evaluation results, keyed by a content hash of
/// the source text.
///
/// A pass is deterministic for fixed source and remote availability, so
/// identical source can reuse the previous result. Memory-only; nothing
/// survives the process.
pub struct ResultCache {
    entries: LruCache<String, EvaluationResult>,
}

impl ResultCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    pub fn get(&mut self, source: &str) -> Option<EvaluationResult> {
        self.entries.get(&source_key(source)).cloned()
    }

    pub fn insert(&mut self, source: &str, result: EvaluationResult) {
        self.entries.put(source_key(source), result);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn source_key(source: &str) -> String {
    format!("{:x}", md5::compute(source.as_bytes()))
}
