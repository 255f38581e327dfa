#![deny(clippy::all, clippy::pedantic)]

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::{Client, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::args::Cli;
use crate::cache::FetchCache;

/// Timeout for the newsletter submission, the one outbound call with an
/// explicit abort.
pub const NEWSLETTER_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum CliError {
    #[error("gateway URL is required (use --server or QUILL_SERVER_URL)")]
    MissingServer,
    #[error("newsletter endpoint is required (use --newsletter-url or QUILL_NEWSLETTER_URL)")]
    MissingNewsletterUrl,
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server error: {0}")]
    Server(String),
}

#[derive(Debug, Serialize)]
struct NewsletterSignup<'a> {
    email: &'a str,
}

#[derive(Debug)]
pub struct Ctx {
    client: Client,
    base: Url,
    cache: FetchCache,
    refresh: bool,
}

impl Ctx {
    pub fn new(site: &str, refresh: bool) -> Result<Self, CliError> {
        let base = Url::parse(site)?.join("/")?;
        let client = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self {
            client,
            base,
            cache: FetchCache::default(),
            refresh,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("quill-cli/", env!("CARGO_PKG_VERSION"))
    }

    pub fn url(&self, path: &str) -> Result<Url, CliError> {
        self.base.join(path.trim_start_matches('/')).map_err(CliError::Url)
    }

    /// GET with the local cache consulted first.
    ///
    /// With `--refresh` the cache is skipped and a `t` timestamp parameter
    /// is appended so no intermediary serves a stale response either.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CliError> {
        let key = FetchCache::key(path, query);
        if !self.refresh {
            if let Some(value) = self.cache.get(&key) {
                return parse(value);
            }
        }

        let mut url = self.url(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
            if self.refresh {
                pairs.append_pair("t", &unix_millis().to_string());
            }
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            return Err(CliError::Server(format!("status {status} body {text}")));
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|err| CliError::Server(format!("failed to parse body: {err}")))?;
        self.cache.put(key, value.clone());
        parse(value)
    }

    /// POST without body; responses are never cached.
    pub async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, CliError> {
        let response = self.client.post(self.url(path)?).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            return Err(CliError::Server(format!("status {status} body {text}")));
        }
        serde_json::from_slice(&bytes)
            .map_err(|err| CliError::Server(format!("failed to parse body: {err}")))
    }

    /// Submit a newsletter signup to an external endpoint.
    pub async fn subscribe(&self, endpoint: &str, email: &str) -> Result<(), CliError> {
        let url = Url::parse(endpoint)?;
        let response = self
            .client
            .post(url)
            .timeout(NEWSLETTER_TIMEOUT)
            .json(&NewsletterSignup { email })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(CliError::Server(format!("status {status} body {text}")));
        }
        Ok(())
    }
}

fn parse<T: DeserializeOwned>(value: Value) -> Result<T, CliError> {
    serde_json::from_value(value)
        .map_err(|err| CliError::Server(format!("failed to parse body: {err}")))
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

pub fn build_ctx_from_cli(cli: &Cli) -> Result<Ctx, CliError> {
    let site = cli.server.clone().ok_or(CliError::MissingServer)?;
    Ctx::new(&site, cli.refresh)
}
