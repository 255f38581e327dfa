#![deny(clippy::all, clippy::pedantic)]

use quill_api_types::{CacheClearResponse, CacheStatsResponse};

use crate::args::CacheCmd;
use crate::client::{CliError, Ctx};
use crate::print;

pub async fn handle(ctx: &Ctx, cmd: CacheCmd) -> Result<(), CliError> {
    match cmd {
        CacheCmd::Stats => {
            let response: CacheStatsResponse = ctx.get("/api/blog/cache/stats", &[]).await?;
            print::cache_stats(&response);
        }
        CacheCmd::Clear => {
            let response: CacheClearResponse = ctx.post("/api/blog/cache/clear").await?;
            println!("{}", response.message);
        }
    }
    Ok(())
}
