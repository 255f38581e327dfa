//! Cache configuration.

use std::time::Duration;

const DEFAULT_LIST_TTL: Duration = Duration::from_secs(30 * 60);
const DEFAULT_CONTENT_TTL: Duration = Duration::from_secs(60 * 60);
const DEFAULT_POST_TTL: Duration = Duration::from_secs(2 * 60 * 60);
const DEFAULT_METADATA_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// Per-tier default lifetimes.
///
/// The content tier carries two values: `content_ttl` for the hydrated
/// collection and the longer `post_ttl` override for individual posts.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub list_ttl: Duration,
    pub content_ttl: Duration,
    pub post_ttl: Duration,
    pub metadata_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            list_ttl: DEFAULT_LIST_TTL,
            content_ttl: DEFAULT_CONTENT_TTL,
            post_ttl: DEFAULT_POST_TTL,
            metadata_ttl: DEFAULT_METADATA_TTL,
        }
    }
}

impl From<&crate::config::CacheSettings> for CacheConfig {
    fn from(settings: &crate::config::CacheSettings) -> Self {
        Self {
            list_ttl: settings.list_ttl,
            content_ttl: settings.content_ttl,
            post_ttl: settings.post_ttl,
            metadata_ttl: settings.metadata_ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = CacheConfig::default();
        assert_eq!(config.list_ttl, Duration::from_secs(1800));
        assert_eq!(config.content_ttl, Duration::from_secs(3600));
        assert_eq!(config.post_ttl, Duration::from_secs(7200));
        assert_eq!(config.metadata_ttl, Duration::from_secs(7200));
    }
}
