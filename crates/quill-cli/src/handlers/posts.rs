#![deny(clippy::all, clippy::pedantic)]

use quill_api_types::{Language, PostListResponse, PostResponse, PostsResponse};

use crate::args::PostsCmd;
use crate::client::{CliError, Ctx};
use crate::{print, translate};

pub async fn handle(ctx: &Ctx, cmd: PostsCmd, lang: Language) -> Result<(), CliError> {
    match cmd {
        PostsCmd::List { category, content } => list(ctx, category, content, lang).await,
        PostsCmd::Show { id, html } => show(ctx, &id, html, lang).await,
    }
}

async fn list(
    ctx: &Ctx,
    category: Option<String>,
    content: bool,
    lang: Language,
) -> Result<(), CliError> {
    if let Some(category) = category {
        let mut response: PostListResponse = ctx
            .get(&format!("/api/blog/posts/category/{category}"), &[])
            .await?;
        if lang == Language::Zh {
            translate::localize_posts(&mut response.posts);
        }
        print::posts_list(&response.posts, lang);
        return Ok(());
    }

    let query: Vec<(&str, String)> = if content {
        vec![("content", "true".to_string())]
    } else {
        Vec::new()
    };
    let mut response: PostsResponse = ctx.get("/api/blog/posts", &query).await?;
    if lang == Language::Zh {
        translate::localize_posts(&mut response.featured);
        translate::localize_posts(&mut response.regular);
    }
    print::posts_overview(&response.featured, &response.regular, lang);
    Ok(())
}

async fn show(ctx: &Ctx, id: &str, html: bool, lang: Language) -> Result<(), CliError> {
    let mut response: PostResponse = ctx.get(&format!("/api/blog/posts/{id}"), &[]).await?;
    if lang == Language::Zh {
        translate::localize_post(&mut response.post);
    }
    print::post_detail(&response.post, lang, html);
    Ok(())
}
