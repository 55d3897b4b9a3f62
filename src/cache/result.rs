//! In-memory article result cache.
//!
//! Keys are BLAKE3 hashes of the source identifier (usually the article URL).
//! Values are shared [`ArticleBias`] results; a hit hands back the same `Arc`
//! that was stored.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use moka::future::Cache;
use tracing::debug;

use super::types::CacheStatus;
use crate::analyzer::ArticleBias;
use crate::hashing::hash_source_id;

/// Source id → article result.
///
/// Unbounded unless built with [`ResultCache::with_capacity`]. Cloning is
/// cheap and clones share entries.
#[derive(Clone)]
pub struct ResultCache {
    entries: Cache<[u8; 32], Arc<ArticleBias>>,
}

impl ResultCache {
    /// Creates an unbounded cache. Entries live for the whole process.
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().build(),
        }
    }

    /// Creates a cache holding at most `capacity` articles.
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            entries: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Returns the cached result for `source_id`, computing and storing it on a miss.
    ///
    /// Concurrent misses for the same key run `compute` once; the other
    /// callers wait for it and report [`CacheStatus::Hit`]. Failed computations
    /// are not stored.
    pub async fn get_or_compute<F, E>(
        &self,
        source_id: &str,
        compute: F,
    ) -> Result<(Arc<ArticleBias>, CacheStatus), Arc<E>>
    where
        F: Future<Output = Result<ArticleBias, E>>,
        E: Send + Sync + 'static,
    {
        let key = hash_source_id(source_id);
        let computed = AtomicBool::new(false);

        let value = self
            .entries
            .try_get_with(key, async {
                computed.store(true, Ordering::Release);
                compute.await.map(Arc::new)
            })
            .await?;

        let status = if computed.load(Ordering::Acquire) {
            CacheStatus::Miss
        } else {
            CacheStatus::Hit
        };
        debug!(source_id, status = %status, "Result cache lookup");
        Ok((value, status))
    }

    pub async fn get(&self, source_id: &str) -> Option<Arc<ArticleBias>> {
        self.entries.get(&hash_source_id(source_id)).await
    }

    pub async fn insert(&self, source_id: &str, value: Arc<ArticleBias>) {
        self.entries.insert(hash_source_id(source_id), value).await;
    }

    pub async fn invalidate(&self, source_id: &str) {
        self.entries.invalidate(&hash_source_id(source_id)).await;
    }

    pub fn contains(&self, source_id: &str) -> bool {
        self.entries.contains_key(&hash_source_id(source_id))
    }

    /// Approximate entry count. Call [`Self::run_pending_tasks`] first for an exact value.
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.entry_count() == 0
    }

    pub async fn run_pending_tasks(&self) {
        self.entries.run_pending_tasks().await;
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}
