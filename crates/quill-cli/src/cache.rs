//! Local request cache.
//!
//! One flat map keyed by operation + parameters, with a fixed short
//! expiry. Consulted before every GET; `--refresh` skips it entirely.

#![deny(clippy::all, clippy::pedantic)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde_json::Value;

pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug)]
pub struct FetchCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, (Instant, Value)>>,
}

impl Default for FetchCache {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }
}

impl FetchCache {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The request signature: path plus query pairs in call order.
    pub fn key(path: &str, query: &[(&str, String)]) -> String {
        if query.is_empty() {
            return path.to_string();
        }
        let pairs: Vec<String> = query
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        format!("{path}?{}", pairs.join("&"))
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        match entries.get(key) {
            Some((inserted, value)) if inserted.elapsed() < self.ttl => Some(value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn put(&self, key: String, value: Value) {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key, (Instant::now(), value));
    }
}
