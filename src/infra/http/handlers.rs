//! Route handlers.
//!
//! The resilience policy is "always degrade, rarely fail loudly": when the
//! upstream is unreachable a handler logs and serves the fixed fallback
//! dataset with HTTP 200. Only a genuine not-found (404) and unrecovered
//! errors (500) surface as failures.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use quill_api_types::{
    CacheClearResponse, CacheStatsResponse, CategoriesResponse, HealthResponse, Post,
    PostListResponse, PostResponse, PostsResponse, ServerInfo,
};
use serde::Deserialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::warn;

use crate::application::{AppError, fallback};

use super::error::not_found;
use super::state::AppState;

/// Query parameters accepted by the post listing route.
///
/// Clients may also append a `t` cache-buster; unknown parameters are
/// accepted and ignored, the gateway's own caches are unaffected by them.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub content: Option<bool>,
}

fn split_posts(posts: Vec<Post>) -> PostsResponse {
    let featured: Vec<Post> = posts.iter().filter(|post| post.featured).cloned().collect();
    let regular: Vec<Post> = posts.iter().filter(|post| !post.featured).cloned().collect();
    PostsResponse {
        success: true,
        posts,
        featured,
        regular,
    }
}

fn degrade(operation: &'static str, error: &AppError) {
    warn!(
        target: "quill::http",
        operation,
        error = %error,
        "upstream unavailable, serving fallback data"
    );
}

pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, AppError> {
    let result = if query.content.unwrap_or(false) {
        state.blog.published_with_content().await
    } else {
        state.blog.published_metadata().await
    };

    match result {
        Ok(posts) => Ok(Json(split_posts(posts)).into_response()),
        Err(error) if error.is_upstream() => {
            degrade("list_posts", &error);
            Ok(Json(split_posts(fallback::mock_posts())).into_response())
        }
        Err(error) => Err(error),
    }
}

pub async fn metadata_posts(State(state): State<AppState>) -> Result<Response, AppError> {
    match state.blog.published_metadata().await {
        Ok(posts) => Ok(Json(split_posts(posts)).into_response()),
        Err(error) if error.is_upstream() => {
            degrade("metadata_posts", &error);
            Ok(Json(split_posts(fallback::mock_posts())).into_response())
        }
        Err(error) => Err(error),
    }
}

pub async fn post_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.blog.post(&id).await {
        Ok(post) => Ok(Json(PostResponse {
            success: true,
            post,
        })
        .into_response()),
        Err(AppError::NotFound) => Ok(not_found("Post not found")),
        Err(error) if error.is_upstream() => {
            degrade("post_by_id", &error);
            match fallback::mock_posts().into_iter().find(|post| post.id == id) {
                Some(post) => Ok(Json(PostResponse {
                    success: true,
                    post,
                })
                .into_response()),
                None => Ok(not_found("Post not found")),
            }
        }
        Err(error) => Err(error),
    }
}

pub async fn posts_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Response, AppError> {
    match state.blog.posts_by_category(&category).await {
        Ok(posts) => Ok(Json(PostListResponse {
            success: true,
            posts,
        })
        .into_response()),
        Err(error) if error.is_upstream() => {
            degrade("posts_by_category", &error);
            let posts = fallback::mock_posts()
                .into_iter()
                .filter(|post| post.category.eq_ignore_ascii_case(&category))
                .collect();
            Ok(Json(PostListResponse {
                success: true,
                posts,
            })
            .into_response())
        }
        Err(error) => Err(error),
    }
}

pub async fn categories(State(state): State<AppState>) -> Result<Response, AppError> {
    match state.blog.categories().await {
        Ok(categories) => Ok(Json(CategoriesResponse {
            success: true,
            categories,
        })
        .into_response()),
        Err(error) if error.is_upstream() => {
            degrade("categories", &error);
            Ok(Json(CategoriesResponse {
                success: true,
                categories: fallback::mock_categories(),
            })
            .into_response())
        }
        Err(error) => Err(error),
    }
}

pub async fn cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let stats = state.blog.cache_stats();
    Json(CacheStatsResponse {
        success: true,
        list: stats.list,
        content: stats.content,
        metadata: stats.metadata,
    })
}

pub async fn cache_clear(State(state): State<AppState>) -> Json<CacheClearResponse> {
    state.blog.clear_caches();
    Json(CacheClearResponse {
        success: true,
        message: "All caches cleared".to_string(),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp,
        uptime_secs: state.started_at.elapsed().as_secs(),
        environment: state.environment.clone(),
    })
}

pub async fn server_info() -> Json<ServerInfo> {
    Json(ServerInfo {
        message: "Quill blog content gateway".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "/health".to_string(),
            "/api/blog/posts - Get all posts".to_string(),
            "/api/blog/posts/metadata - Get posts metadata only (fast)".to_string(),
            "/api/blog/posts/{id} - Get specific post".to_string(),
            "/api/blog/posts/category/{category} - Get posts by category".to_string(),
            "/api/blog/categories - Get all categories".to_string(),
            "/api/blog/cache/stats - Get cache statistics".to_string(),
            "/api/blog/cache/clear - Clear all caches (POST)".to_string(),
        ],
    })
}
