//! Verifies the cache tiers emit the expected metric keys.

use std::collections::HashSet;

use metrics_util::debugging::DebuggingRecorder;
use quill::cache::{CacheConfig, CacheStores};
use quill_api_types::{CategoryMap, Localized, Post};
use serial_test::serial;

fn sample_post(id: &str) -> Post {
    Post {
        id: id.to_string(),
        title: Localized::new("Metrics Test Post", ""),
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
#[serial]
fn cache_paths_emit_expected_metric_keys() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        let stores = CacheStores::new(&CacheConfig::default());

        // One miss and one hit per tier.
        assert!(stores.list.get().is_none());
        stores.list.set(vec![sample_post("p1")]);
        assert!(stores.list.get().is_some());

        assert!(stores.content.get_post("p1").is_none());
        stores.content.set_post(sample_post("p1"));
        assert!(stores.content.get_post("p1").is_some());

        assert!(stores.metadata.get_categories().is_none());
        stores.metadata.set_categories(CategoryMap::new());
        assert!(stores.metadata.get_categories().is_some());
    });

    let emitted: HashSet<String> = snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .map(|(key, _, _, _)| key.key().name().to_string())
        .collect();

    for expected in [
        "quill_cache_list_hit_total",
        "quill_cache_list_miss_total",
        "quill_cache_content_hit_total",
        "quill_cache_content_miss_total",
        "quill_cache_metadata_hit_total",
        "quill_cache_metadata_miss_total",
    ] {
        assert!(emitted.contains(expected), "missing metric `{expected}`");
    }
}

#[test]
#[serial]
fn counters_match_atomic_stats() {
    let recorder = DebuggingRecorder::new();

    metrics::with_local_recorder(&recorder, || {
        let stores = CacheStores::new(&CacheConfig::default());
        stores.list.get();
        stores.list.set(vec![sample_post("p1")]);
        stores.list.get();
        stores.list.get();

        let stats = stores.list.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
    });
}
