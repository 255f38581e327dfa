#![deny(clippy::all, clippy::pedantic)]

use quill_api_types::HealthResponse;

use crate::client::{CliError, Ctx};
use crate::print;

pub async fn handle(ctx: &Ctx) -> Result<(), CliError> {
    let response: HealthResponse = ctx.get("/health", &[]).await?;
    print::health(&response);
    Ok(())
}
