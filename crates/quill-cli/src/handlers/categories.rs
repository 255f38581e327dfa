#![deny(clippy::all, clippy::pedantic)]

use quill_api_types::{CategoriesResponse, Language};

use crate::client::{CliError, Ctx};
use crate::print;

pub async fn handle(ctx: &Ctx, lang: Language) -> Result<(), CliError> {
    let response: CategoriesResponse = ctx.get("/api/blog/categories", &[]).await?;
    print::categories(&response.categories, lang);
    Ok(())
}
