//! Plain-text output for the terminal.

#![deny(clippy::all, clippy::pedantic)]

use quill_api_types::{
    CacheStatsResponse, CategoryMap, HealthResponse, Language, Post, TierStats,
};

use crate::render;

pub fn posts_list(posts: &[Post], lang: Language) {
    if posts.is_empty() {
        println!("(no posts)");
        return;
    }
    for post in posts {
        let marker = if post.featured { "*" } else { " " };
        println!(
            "{marker} {}  [{}]  {}  ({})",
            post.id,
            post.category,
            post.title.get(lang),
            post.meta.get(lang)
        );
    }
}

pub fn posts_overview(featured: &[Post], regular: &[Post], lang: Language) {
    println!("Featured:");
    posts_list(featured, lang);
    println!("\nRegular:");
    posts_list(regular, lang);
}

pub fn post_detail(post: &Post, lang: Language, html: bool) {
    println!("{}", post.title.get(lang));
    println!("{}", post.meta.get(lang));
    println!("category: {}\n", post.category);

    let body = post.content.get(lang);
    if html {
        println!("{}", render::markdown_to_html(body));
    } else {
        println!("{body}");
    }
}

pub fn categories(categories: &CategoryMap, lang: Language) {
    for (key, name) in categories {
        println!("{key}  {}", name.get(lang));
    }
}

fn tier(name: &str, stats: TierStats) {
    println!(
        "{name:>9}  keys={}  hits={}  misses={}",
        stats.keys, stats.hits, stats.misses
    );
}

pub fn cache_stats(stats: &CacheStatsResponse) {
    tier("list", stats.list);
    tier("content", stats.content);
    tier("metadata", stats.metadata);
}

pub fn health(health: &HealthResponse) {
    println!(
        "{} ({}), up {}s, at {}",
        health.status, health.environment, health.uptime_secs, health.timestamp
    );
}
