//! Category display names.
//!
//! Categories are derived, never stored: the set of distinct category
//! strings across posts, keyed lower-cased. English display names are the
//! capitalized key; Chinese names come from a fixed table and fall back to
//! the raw category when the table has no entry.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use quill_api_types::{CategoryMap, Localized, Post};

static CHINESE_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("expression", "表达"),
        ("experiment", "实验"),
        ("experience", "体验"),
    ])
});

/// Chinese display name for a category, falling back to the raw value.
pub fn chinese_name(category: &str) -> String {
    CHINESE_NAMES
        .get(category.to_lowercase().as_str())
        .map_or_else(|| category.to_string(), |name| (*name).to_string())
}

/// English display name: the category with its first letter upper-cased.
pub fn english_name(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Derive the category mapping from a set of posts.
///
/// Keys are the distinct lower-cased `category` values, so the mapping is
/// consistent with whatever metadata list it was computed from.
pub fn derive(posts: &[Post]) -> CategoryMap {
    let mut categories = CategoryMap::new();
    for post in posts {
        let key = post.category.to_lowercase();
        categories.entry(key).or_insert_with(|| {
            Localized::new(english_name(&post.category), chinese_name(&post.category))
        });
    }
    categories
}
