#![deny(clippy::all, clippy::pedantic)]

use httpmock::MockServer;
use serde_json::json;

use crate::args::{Cli, Commands, LangArg, PostsCmd};
use crate::client::{CliError, Ctx, build_ctx_from_cli};
use crate::handlers;
use quill_api_types::{CategoriesResponse, Language, PostsResponse};

fn ctx(server: &MockServer) -> Ctx {
    Ctx::new(&server.base_url(), false).expect("ctx")
}

fn refresh_ctx(server: &MockServer) -> Ctx {
    Ctx::new(&server.base_url(), true).expect("ctx")
}

fn categories_body() -> serde_json::Value {
    json!({
        "success": true,
        "categories": {
            "experience": {"en": "Experience", "zh": "体验"}
        }
    })
}

#[test]
fn binary_fails_fast_without_server_url() {
    let mut cmd = assert_cmd::Command::cargo_bin("quill-cli").expect("binary");
    cmd.env_remove("QUILL_SERVER_URL")
        .arg("health")
        .assert()
        .failure()
        .stderr(predicates::str::contains("MissingServer"));
}

#[test]
fn build_ctx_requires_server_url() {
    let cli = Cli {
        server: None,
        lang: LangArg::En,
        refresh: false,
        newsletter_url: None,
        command: Commands::Health,
    };

    let err = build_ctx_from_cli(&cli).expect_err("missing server should fail");
    assert!(matches!(err, CliError::MissingServer));
}

#[tokio::test]
async fn cached_get_hits_server_once() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("GET").path("/api/blog/categories");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(categories_body());
        })
        .await;

    let ctx = ctx(&server);
    let first: CategoriesResponse = ctx.get("/api/blog/categories", &[]).await.expect("first");
    let second: CategoriesResponse = ctx.get("/api/blog/categories", &[]).await.expect("second");

    assert_eq!(mock.hits_async().await, 1);
    assert_eq!(first.categories.len(), second.categories.len());
}

#[tokio::test]
async fn refresh_bypasses_cache_and_appends_cache_buster() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("GET")
                .path("/api/blog/categories")
                .query_param_exists("t");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(categories_body());
        })
        .await;

    let ctx = refresh_ctx(&server);
    let _: CategoriesResponse = ctx.get("/api/blog/categories", &[]).await.expect("first");
    let _: CategoriesResponse = ctx.get("/api/blog/categories", &[]).await.expect("second");

    // Both requests reached the server, each carrying the buster.
    assert_eq!(mock.hits_async().await, 2);
}

#[tokio::test]
async fn distinct_query_parameters_are_distinct_cache_entries() {
    let server = MockServer::start_async().await;
    let plain = server
        .mock_async(|when, then| {
            when.method("GET").path("/api/blog/posts");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "success": true, "posts": [], "featured": [], "regular": []
                }));
        })
        .await;

    let ctx = ctx(&server);
    let _: PostsResponse = ctx.get("/api/blog/posts", &[]).await.expect("plain");
    let _: PostsResponse = ctx
        .get("/api/blog/posts", &[("content", "true".to_string())])
        .await
        .expect("hydrated");

    assert_eq!(plain.hits_async().await, 2);
}

#[tokio::test]
async fn server_error_surfaces_with_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method("GET").path("/api/blog/categories");
            then.status(500).body("boom");
        })
        .await;

    let ctx = ctx(&server);
    let err = ctx
        .get::<CategoriesResponse>("/api/blog/categories", &[])
        .await
        .expect_err("500 should fail");
    assert!(matches!(err, CliError::Server(message) if message.contains("boom")));
}

#[tokio::test]
async fn newsletter_subscribe_posts_email_json() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("POST")
                .path("/subscribe")
                .json_body(json!({"email": "reader@example.com"}));
            then.status(200);
        })
        .await;

    let ctx = ctx(&server);
    ctx.subscribe(&server.url("/subscribe"), "reader@example.com")
        .await
        .expect("subscribe");
    mock.assert_async().await;
}

#[tokio::test]
async fn posts_list_handler_fetches_overview() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("GET").path("/api/blog/posts");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "success": true,
                    "posts": [],
                    "featured": [],
                    "regular": []
                }));
        })
        .await;

    let ctx = ctx(&server);
    handlers::posts::handle(
        &ctx,
        PostsCmd::List {
            category: None,
            content: false,
        },
        Language::En,
    )
    .await
    .expect("handler");
    mock.assert_async().await;
}

#[tokio::test]
async fn cache_clear_posts_are_never_cached() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("POST").path("/api/blog/cache/clear");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"success": true, "message": "All caches cleared"}));
        })
        .await;

    let ctx = ctx(&server);
    handlers::cache::handle(&ctx, crate::args::CacheCmd::Clear)
        .await
        .expect("first clear");
    handlers::cache::handle(&ctx, crate::args::CacheCmd::Clear)
        .await
        .expect("second clear");
    assert_eq!(mock.hits_async().await, 2);
}
