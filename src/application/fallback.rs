//! Fixed fallback dataset served when the upstream is unavailable.
//!
//! Two posts and three categories, enough for the site to render something
//! sensible while the content source is down.

use quill_api_types::{CategoryMap, Localized, Post};
use time::macros::date;

use crate::infra::notion::parse;

pub fn mock_posts() -> Vec<Post> {
    vec![
        Post {
            id: "future-technology-human-connection".to_string(),
            title: Localized::new(
                "The Future of Technology and Human Connection",
                "技术与人类连接的未来",
            ),
            excerpt: Localized::new(
                "Exploring how emerging technologies are reshaping the way we interact, \
                 communicate, and build meaningful relationships in the digital age.",
                "探索新兴技术如何重塑我们在数字时代互动、交流和建立有意义关系的方式。",
            ),
            content: Localized::new(
                "This is fallback content. The blog API is currently unavailable.",
                "这是后备内容。博客API目前不可用。",
            ),
            meta: parse::meta_strings(Some(date!(2024 - 03 - 15)), 8),
            category: "experience".to_string(),
            date: Some(date!(2024 - 03 - 15)),
            read_time: 8,
            featured: true,
            content_loaded: true,
        },
        Post {
            id: "minimalist-design-principles".to_string(),
            title: Localized::new(
                "Minimalist Design Principles for Modern Web",
                "现代网页的极简设计原则",
            ),
            excerpt: Localized::new(
                "Understanding the power of simplicity in creating effective user experiences.",
                "理解简约在创造有效用户体验中的力量。",
            ),
            content: Localized::new(
                "This is fallback content. The blog API is currently unavailable.",
                "这是后备内容。博客API目前不可用。",
            ),
            meta: parse::meta_strings(Some(date!(2024 - 03 - 12)), 5),
            category: "expression".to_string(),
            date: Some(date!(2024 - 03 - 12)),
            read_time: 5,
            featured: false,
            content_loaded: true,
        },
    ]
}

pub fn mock_categories() -> CategoryMap {
    CategoryMap::from([
        (
            "experience".to_string(),
            Localized::new("Experience", "体验"),
        ),
        (
            "expression".to_string(),
            Localized::new("Expression", "表达"),
        ),
        (
            "experiment".to_string(),
            Localized::new("Experiment", "实验"),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_dataset_has_one_featured_and_one_regular_post() {
        let posts = mock_posts();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts.iter().filter(|post| post.featured).count(), 1);
    }

    #[test]
    fn mock_categories_cover_the_mock_posts() {
        let categories = mock_categories();
        for post in mock_posts() {
            assert!(categories.contains_key(&post.category));
        }
    }
}
