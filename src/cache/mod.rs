//! Quill cache system.
//!
//! Three independent time-bucketed tiers, differing only in default
//! lifetime and granularity:
//!
//! - **list**: the ordered metadata array for all published posts
//! - **content**: fully hydrated posts, per-id and as a collection
//! - **metadata**: derived aggregates (the category mapping)
//!
//! Entries expire lazily on read; the only other removal is an explicit
//! flush. Clearing one tier never touches another.
//!
//! ## Configuration
//!
//! Tier lifetimes come from `quill.toml`:
//!
//! ```toml
//! [cache]
//! list_ttl_secs = 1800
//! content_ttl_secs = 3600
//! post_ttl_secs = 7200
//! metadata_ttl_secs = 7200
//! ```

mod config;
mod store;

pub use config::CacheConfig;
pub use store::{CacheStats, CacheStores, ContentStore, ListStore, MetadataStore};
