//! quill-cli: command-line client for the Quill blog gateway.
//! Keeps a short-lived local request cache and renders posts for the
//! terminal; reuses the shared api-types crate for all wire shapes.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod cache;
mod client;
mod handlers;
mod print;
mod render;
mod translate;

#[cfg(test)]
mod tests;

use clap::Parser;
use quill_api_types::Language;

use args::{Cli, Commands};
use client::{CliError, build_ctx_from_cli};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = build_ctx_from_cli(&cli)?;
    let lang = Language::from(cli.lang);

    match cli.command {
        Commands::Posts(cmd) => handlers::posts::handle(&ctx, cmd.action, lang).await?,
        Commands::Categories => handlers::categories::handle(&ctx, lang).await?,
        Commands::Cache(cmd) => handlers::cache::handle(&ctx, cmd.action).await?,
        Commands::Health => handlers::health::handle(&ctx).await?,
        Commands::Newsletter(cmd) => {
            handlers::newsletter::handle(&ctx, cli.newsletter_url.as_deref(), cmd.action).await?;
        }
    }

    Ok(())
}
