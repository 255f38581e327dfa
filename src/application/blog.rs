//! The gateway's content service.
//!
//! Two paths through this service: the metadata fast path (one upstream
//! query, no block fetches) feeds the homepage and the derived accessors;
//! the content slow path hydrates post bodies, either per post or in
//! bounded batches for the full collection.

use std::sync::Arc;

use futures::future::join_all;
use tracing::warn;

use crate::cache::{CacheStats, CacheStores};
use crate::domain::{CategoryMap, Localized, Post, categories};
use crate::infra::notion::{NotionClient, parse};

use super::error::AppError;

/// Posts hydrated concurrently per batch; batches run sequentially, which
/// bounds upstream concurrency to the batch size.
pub const HYDRATION_BATCH_SIZE: usize = 5;

pub struct BlogService {
    notion: Arc<NotionClient>,
    caches: Arc<CacheStores>,
}

impl BlogService {
    pub fn new(notion: Arc<NotionClient>, caches: Arc<CacheStores>) -> Self {
        Self { notion, caches }
    }

    /// All published posts, metadata only. Never fetches post bodies.
    pub async fn published_metadata(&self) -> Result<Vec<Post>, AppError> {
        if let Some(posts) = self.caches.list.get() {
            return Ok(posts);
        }

        let pages = self.notion.query_published().await?;
        let posts: Vec<Post> = pages.iter().map(parse::post_from_page).collect();
        self.caches.list.set(posts.clone());
        Ok(posts)
    }

    /// All published posts with bodies attached.
    pub async fn published_with_content(&self) -> Result<Vec<Post>, AppError> {
        if let Some(posts) = self.caches.content.get_collection() {
            return Ok(posts);
        }

        let metadata = self.published_metadata().await?;
        let hydrated = self.hydrate_posts(metadata).await;
        self.caches.content.set_collection(hydrated.clone());
        Ok(hydrated)
    }

    /// Attach bodies to a metadata set, in fixed-size batches.
    ///
    /// Within a batch every conversion runs concurrently and every outcome
    /// is awaited; a failed conversion degrades that one post to a
    /// placeholder instead of aborting anything. The next batch starts
    /// only after the previous one is fully settled.
    pub async fn hydrate_posts(&self, posts: Vec<Post>) -> Vec<Post> {
        let mut hydrated = Vec::with_capacity(posts.len());

        for batch in posts.chunks(HYDRATION_BATCH_SIZE) {
            let conversions = batch.iter().map(|post| self.notion.page_markdown(&post.id));
            let outcomes = join_all(conversions).await;

            for (post, outcome) in batch.iter().zip(outcomes) {
                let mut post = post.clone();
                match outcome {
                    Ok(markdown) => post.content.en = markdown,
                    Err(error) => {
                        warn!(
                            target: "quill::blog",
                            post_id = %post.id,
                            error = %error,
                            "content conversion failed, serving placeholder"
                        );
                        post.content = unavailable_placeholder(&post.content);
                    }
                }
                post.content_loaded = true;
                hydrated.push(post);
            }
        }

        hydrated
    }

    /// A single post with its body. The page fetch and the conversion run
    /// concurrently and are joined before combining.
    pub async fn post(&self, id: &str) -> Result<Post, AppError> {
        if let Some(post) = self.caches.content.get_post(id) {
            return Ok(post);
        }

        let (page, markdown) = tokio::join!(
            self.notion.retrieve_page(id),
            self.notion.page_markdown(id)
        );

        let mut post = parse::post_from_page(&page?);
        match markdown {
            Ok(markdown) => post.content.en = markdown,
            Err(error) => {
                warn!(
                    target: "quill::blog",
                    post_id = %id,
                    error = %error,
                    "content conversion failed, serving placeholder"
                );
                post.content = unavailable_placeholder(&post.content);
            }
        }
        post.content_loaded = true;

        self.caches.content.set_post(post.clone());
        Ok(post)
    }

    /// Published posts in one category, metadata only.
    pub async fn posts_by_category(&self, category: &str) -> Result<Vec<Post>, AppError> {
        let posts = self.published_metadata().await?;
        Ok(posts
            .into_iter()
            .filter(|post| post.category.eq_ignore_ascii_case(category))
            .collect())
    }

    /// The derived category mapping.
    pub async fn categories(&self) -> Result<CategoryMap, AppError> {
        if let Some(categories) = self.caches.metadata.get_categories() {
            return Ok(categories);
        }

        let posts = self.published_metadata().await?;
        let derived = categories::derive(&posts);
        self.caches.metadata.set_categories(derived.clone());
        Ok(derived)
    }

    pub fn clear_caches(&self) {
        self.caches.clear_all();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.caches.stats()
    }
}

fn unavailable_placeholder(existing: &Localized) -> Localized {
    Localized::new(
        "Content is temporarily unavailable.",
        if existing.zh.is_empty() {
            "内容暂时不可用。".to_string()
        } else {
            existing.zh.clone()
        },
    )
}
