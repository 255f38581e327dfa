//! Command-line surface for `quill-cli`.

#![deny(clippy::all, clippy::pedantic)]

use clap::{Parser, Subcommand, ValueEnum};
use quill_api_types::Language;

#[derive(Parser, Debug)]
#[command(name = "quill-cli", version, about = "Quill blog gateway CLI", long_about = None)]
pub struct Cli {
    /// Gateway base URL, e.g. <http://localhost:5000>
    #[arg(long, env = "QUILL_SERVER_URL")]
    pub server: Option<String>,

    /// Display language
    #[arg(long, value_enum, default_value_t = LangArg::En)]
    pub lang: LangArg,

    /// Bypass the local request cache and force revalidation
    #[arg(long)]
    pub refresh: bool,

    /// Newsletter signup endpoint, used by `newsletter subscribe`
    #[arg(long, env = "QUILL_NEWSLETTER_URL")]
    pub newsletter_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LangArg {
    En,
    Zh,
}

impl From<LangArg> for Language {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::En => Language::En,
            LangArg::Zh => Language::Zh,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read posts (list/show)
    Posts(PostsArgs),
    /// List categories
    Categories,
    /// Gateway cache inspection and flushing
    Cache(CacheArgs),
    /// Gateway health check
    Health,
    /// Newsletter signup
    Newsletter(NewsletterArgs),
}

#[derive(Parser, Debug)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub action: PostsCmd,
}

#[derive(Subcommand, Debug)]
pub enum PostsCmd {
    /// List posts, optionally filtered by category
    List {
        #[arg(long)]
        category: Option<String>,
        /// Request fully hydrated posts instead of metadata only
        #[arg(long)]
        content: bool,
    },
    /// Show a single post
    Show {
        id: String,
        /// Render the body as HTML instead of markdown
        #[arg(long)]
        html: bool,
    },
}

#[derive(Parser, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub action: CacheCmd,
}

#[derive(Subcommand, Debug)]
pub enum CacheCmd {
    /// Per-tier key counts and hit/miss counters
    Stats,
    /// Flush every gateway cache tier
    Clear,
}

#[derive(Parser, Debug)]
pub struct NewsletterArgs {
    #[command(subcommand)]
    pub action: NewsletterCmd,
}

#[derive(Subcommand, Debug)]
pub enum NewsletterCmd {
    /// Subscribe an email address
    Subscribe { email: String },
}
