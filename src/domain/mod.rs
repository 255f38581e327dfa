//! Domain model for the blog: posts, categories, and their derivations.
//!
//! The wire-facing records live in `quill-api-types` so the gateway and its
//! clients share one contract; this module re-exports them and holds the
//! logic that is not about transport.

pub mod categories;

pub use quill_api_types::{CategoryMap, Language, Localized, Post};
