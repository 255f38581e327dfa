//! Tier store implementations.
//!
//! Singleton values (the published list, the hydrated collection, the
//! category mapping) live in `RwLock<Option<..>>` slots; per-post entries
//! live in a `DashMap`. Every entry carries its own insertion instant and
//! time-to-live, checked on read. Expired entries are removed by the read
//! that finds them stale.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use metrics::counter;
use quill_api_types::{CategoryMap, Post, TierStats};

use super::config::CacheConfig;

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    inserted: Instant,
    ttl: Duration,
}

impl<V> Entry<V> {
    fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            inserted: Instant::now(),
            ttl,
        }
    }

    fn fresh(&self) -> bool {
        self.inserted.elapsed() < self.ttl
    }
}

/// Hit/miss accounting for one tier, mirrored into `metrics` counters.
struct TierCounters {
    hit_metric: &'static str,
    miss_metric: &'static str,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl TierCounters {
    fn new(hit_metric: &'static str, miss_metric: &'static str) -> Self {
        Self {
            hit_metric,
            miss_metric,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
        counter!(self.hit_metric).increment(1);
    }

    fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
        counter!(self.miss_metric).increment(1);
    }

    fn stats(&self, keys: usize) -> TierStats {
        TierStats {
            keys,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

fn read_slot<V: Clone>(slot: &RwLock<Option<Entry<V>>>, counters: &TierCounters) -> Option<V> {
    {
        let guard = slot.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(entry) = guard.as_ref() {
            if entry.fresh() {
                counters.record_hit();
                return Some(entry.value.clone());
            }
        } else {
            counters.record_miss();
            return None;
        }
    }
    // Entry was stale: drop it so stats reflect reality, unless a writer
    // replaced it in the meantime.
    let mut guard = slot
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    if guard.as_ref().is_some_and(|entry| !entry.fresh()) {
        *guard = None;
    }
    counters.record_miss();
    None
}

fn write_slot<V>(slot: &RwLock<Option<Entry<V>>>, value: V, ttl: Duration) {
    *slot
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(Entry::new(value, ttl));
}

fn slot_key_count<V>(slot: &RwLock<Option<Entry<V>>>) -> usize {
    slot.read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .as_ref()
        .is_some_and(Entry::fresh) as usize
}

fn clear_slot<V>(slot: &RwLock<Option<Entry<V>>>) {
    *slot
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
}

/// List tier: the ordered metadata array for all published posts.
pub struct ListStore {
    slot: RwLock<Option<Entry<Vec<Post>>>>,
    counters: TierCounters,
    default_ttl: Duration,
}

impl ListStore {
    fn new(config: &CacheConfig) -> Self {
        Self {
            slot: RwLock::new(None),
            counters: TierCounters::new("quill_cache_list_hit_total", "quill_cache_list_miss_total"),
            default_ttl: config.list_ttl,
        }
    }

    pub fn get(&self) -> Option<Vec<Post>> {
        read_slot(&self.slot, &self.counters)
    }

    pub fn set(&self, posts: Vec<Post>) {
        write_slot(&self.slot, posts, self.default_ttl);
    }

    pub fn clear(&self) {
        clear_slot(&self.slot);
    }

    pub fn stats(&self) -> TierStats {
        self.counters.stats(slot_key_count(&self.slot))
    }
}

/// Content tier: fully hydrated posts, per-id and as a collection.
///
/// Individual posts carry the longer `post_ttl` override; the collection
/// entry uses the tier default.
pub struct ContentStore {
    posts: DashMap<String, Entry<Post>>,
    collection: RwLock<Option<Entry<Vec<Post>>>>,
    counters: TierCounters,
    default_ttl: Duration,
    post_ttl: Duration,
}

impl ContentStore {
    fn new(config: &CacheConfig) -> Self {
        Self {
            posts: DashMap::new(),
            collection: RwLock::new(None),
            counters: TierCounters::new(
                "quill_cache_content_hit_total",
                "quill_cache_content_miss_total",
            ),
            default_ttl: config.content_ttl,
            post_ttl: config.post_ttl,
        }
    }

    pub fn get_post(&self, id: &str) -> Option<Post> {
        let stale = match self.posts.get(id) {
            Some(entry) if entry.fresh() => {
                self.counters.record_hit();
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };
        if stale {
            self.posts.remove(id);
        }
        self.counters.record_miss();
        None
    }

    pub fn set_post(&self, post: Post) {
        self.posts
            .insert(post.id.clone(), Entry::new(post, self.post_ttl));
    }

    pub fn get_collection(&self) -> Option<Vec<Post>> {
        read_slot(&self.collection, &self.counters)
    }

    pub fn set_collection(&self, posts: Vec<Post>) {
        write_slot(&self.collection, posts, self.default_ttl);
    }

    pub fn clear(&self) {
        self.posts.clear();
        clear_slot(&self.collection);
    }

    pub fn stats(&self) -> TierStats {
        let keys = self.posts.iter().filter(|entry| entry.fresh()).count()
            + slot_key_count(&self.collection);
        self.counters.stats(keys)
    }
}

/// Metadata tier: derived aggregates.
pub struct MetadataStore {
    categories: RwLock<Option<Entry<CategoryMap>>>,
    counters: TierCounters,
    default_ttl: Duration,
}

impl MetadataStore {
    fn new(config: &CacheConfig) -> Self {
        Self {
            categories: RwLock::new(None),
            counters: TierCounters::new(
                "quill_cache_metadata_hit_total",
                "quill_cache_metadata_miss_total",
            ),
            default_ttl: config.metadata_ttl,
        }
    }

    pub fn get_categories(&self) -> Option<CategoryMap> {
        read_slot(&self.categories, &self.counters)
    }

    pub fn set_categories(&self, categories: CategoryMap) {
        write_slot(&self.categories, categories, self.default_ttl);
    }

    pub fn clear(&self) {
        clear_slot(&self.categories);
    }

    pub fn stats(&self) -> TierStats {
        self.counters.stats(slot_key_count(&self.categories))
    }
}

/// Per-tier stats snapshot for the cache-stats endpoint.
#[derive(Debug, Clone, Copy)]
pub struct CacheStats {
    pub list: TierStats,
    pub content: TierStats,
    pub metadata: TierStats,
}

/// The three tiers, constructed once at startup and shared by reference.
pub struct CacheStores {
    pub list: ListStore,
    pub content: ContentStore,
    pub metadata: MetadataStore,
}

impl CacheStores {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            list: ListStore::new(config),
            content: ContentStore::new(config),
            metadata: MetadataStore::new(config),
        }
    }

    /// Flush every tier. The umbrella operation exposed to operators;
    /// there is no cross-tier coupling besides this.
    pub fn clear_all(&self) {
        self.list.clear();
        self.content.clear();
        self.metadata.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            list: self.list.stats(),
            content: self.content.stats(),
            metadata: self.metadata.stats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use quill_api_types::Localized;

    use super::*;

    fn short_config() -> CacheConfig {
        CacheConfig {
            list_ttl: Duration::from_millis(40),
            content_ttl: Duration::from_millis(40),
            post_ttl: Duration::from_millis(80),
            metadata_ttl: Duration::from_millis(40),
        }
    }

    fn sample_post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            title: Localized::new("Title", ""),
            excerpt: Localized::default(),
            content: Localized::default(),
            meta: Localized::new("5 min read", "5分钟阅读"),
            category: "experience".to_string(),
            date: None,
            read_time: 5,
            featured: false,
            content_loaded: false,
        }
    }

    #[test]
    fn value_is_visible_until_ttl_elapses() {
        let stores = CacheStores::new(&short_config());
        stores.list.set(vec![sample_post("a")]);

        assert!(stores.list.get().is_some());
        std::thread::sleep(Duration::from_millis(60));
        assert!(stores.list.get().is_none());
    }

    #[test]
    fn per_post_override_outlives_collection_entry() {
        let stores = CacheStores::new(&short_config());
        stores.content.set_post(sample_post("a"));
        stores.content.set_collection(vec![sample_post("a")]);

        std::thread::sleep(Duration::from_millis(60));
        assert!(stores.content.get_collection().is_none());
        assert!(stores.content.get_post("a").is_some());
    }

    #[test]
    fn hit_and_miss_counters_track_reads() {
        let stores = CacheStores::new(&CacheConfig::default());
        assert!(stores.metadata.get_categories().is_none());
        stores.metadata.set_categories(CategoryMap::new());
        assert!(stores.metadata.get_categories().is_some());

        let stats = stores.metadata.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.keys, 1);
    }

    #[test]
    fn clearing_one_tier_leaves_the_others() {
        let stores = CacheStores::new(&CacheConfig::default());
        stores.list.set(vec![sample_post("a")]);
        stores.content.set_post(sample_post("a"));
        stores.metadata.set_categories(CategoryMap::new());

        stores.list.clear();
        assert!(stores.list.get().is_none());
        assert!(stores.content.get_post("a").is_some());
        assert!(stores.metadata.get_categories().is_some());
    }

    #[test]
    fn clear_all_flushes_every_tier() {
        let stores = CacheStores::new(&CacheConfig::default());
        stores.list.set(vec![sample_post("a")]);
        stores.content.set_post(sample_post("a"));
        stores.content.set_collection(vec![sample_post("a")]);
        stores.metadata.set_categories(CategoryMap::new());

        stores.clear_all();
        let stats = stores.stats();
        assert_eq!(stats.list.keys, 0);
        assert_eq!(stats.content.keys, 0);
        assert_eq!(stats.metadata.keys, 0);
    }

    #[test]
    fn stale_entries_do_not_count_as_keys() {
        let stores = CacheStores::new(&short_config());
        stores.content.set_collection(vec![sample_post("a")]);
        assert_eq!(stores.content.stats().keys, 1);

        std::thread::sleep(Duration::from_millis(60));
        assert_eq!(stores.content.stats().keys, 0);
    }
}
