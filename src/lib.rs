//! Quill: a thin content gateway that publishes a Notion workspace as a
//! bilingual JSON blog API.
//!
//! The crate is layered the same way top to bottom: `domain` holds the
//! post/category model, `application` the gateway services, `cache` the
//! three tier stores, and `infra` the Notion client, HTTP surface, and
//! telemetry.

pub mod application;
pub mod cache;
pub mod config;
pub mod domain;
pub mod infra;
