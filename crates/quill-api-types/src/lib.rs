//! Shared request and response types for the Quill blog gateway API.
//!
//! Everything that crosses the HTTP boundary lives here so the gateway and
//! its clients agree on one wire contract. Field names serialize in
//! camelCase (`readTime`, `contentLoaded`) to stay compatible with existing
//! consumers of the API.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(date_format, Date, "[year]-[month]-[day]");

/// Language codes the platform serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            other => Err(format!("unknown language `{other}` (expected en|zh)")),
        }
    }
}

/// A bilingual string pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub zh: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: zh.into(),
        }
    }

    /// The string for `lang`, falling back to the other language when empty.
    pub fn get(&self, lang: Language) -> &str {
        let (preferred, fallback) = match lang {
            Language::En => (&self.en, &self.zh),
            Language::Zh => (&self.zh, &self.en),
        };
        if preferred.is_empty() { fallback } else { preferred }
    }
}

/// A blog post as served by the gateway.
///
/// `content_loaded` distinguishes metadata-only records (fast path) from
/// fully hydrated ones; identity is the opaque upstream page id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: Localized,
    pub excerpt: Localized,
    #[serde(default)]
    pub content: Localized,
    pub meta: Localized,
    pub category: String,
    #[serde(default, with = "date_format::option")]
    pub date: Option<Date>,
    pub read_time: u32,
    pub featured: bool,
    #[serde(default)]
    pub content_loaded: bool,
}

/// Category key → bilingual display name.
pub type CategoryMap = BTreeMap<String, Localized>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsResponse {
    pub success: bool,
    pub posts: Vec<Post>,
    pub featured: Vec<Post>,
    pub regular: Vec<Post>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub success: bool,
    pub post: Post,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    pub success: bool,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// Error envelope used for 404 and 500 responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

/// Key count and hit/miss counters for one cache tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierStats {
    pub keys: usize,
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatsResponse {
    pub success: bool,
    pub list: TierStats,
    pub content: TierStats,
    pub metadata: TierStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheClearResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime_secs: u64,
    pub environment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}
