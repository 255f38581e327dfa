//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{
    net::{IpAddr, SocketAddr},
    num::NonZeroU64,
    path::PathBuf,
    str::FromStr,
    time::Duration,
};

use clap::{Args, Parser, builder::BoolishValueParser};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "quill";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.notion.com/v1";
const DEFAULT_UPSTREAM_VERSION: &str = "2022-06-28";
const DEFAULT_LIST_TTL_SECS: u64 = 30 * 60;
const DEFAULT_CONTENT_TTL_SECS: u64 = 60 * 60;
const DEFAULT_POST_TTL_SECS: u64 = 2 * 60 * 60;
const DEFAULT_METADATA_TTL_SECS: u64 = 2 * 60 * 60;
const DEFAULT_ENVIRONMENT: &str = "development";

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

/// Command-line arguments for the Quill gateway binary.
#[derive(Debug, Default, Parser)]
#[command(name = "quill", version, about = "Quill blog content gateway")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "QUILL_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: ServeOverrides,
}

#[derive(Debug, Args, Default, Clone)]
pub struct ServeOverrides {
    /// Override the listener host.
    #[arg(long = "server-host", value_name = "HOST")]
    pub server_host: Option<String>,

    /// Override the listener port.
    #[arg(long = "server-port", value_name = "PORT")]
    pub server_port: Option<u16>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    pub cache: CacheSettings,
    pub http: HttpSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub addr: SocketAddr,
}

/// Credentials and endpoint for the upstream content source.
///
/// An empty `api_key` is allowed: the gateway still serves its fallback
/// dataset when every upstream call is rejected.
#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    pub api_key: String,
    pub database_id: String,
    pub base_url: String,
    pub version: String,
}

#[derive(Debug, Clone)]
pub struct CacheSettings {
    pub list_ttl: Duration,
    pub content_ttl: Duration,
    pub post_ttl: Duration,
    pub metadata_ttl: Duration,
}

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub allowed_origins: Vec<String>,
    pub environment: String,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Parse CLI arguments and load settings in one step.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let cli = CliArgs::parse();
    let settings = load(&cli)?;
    Ok((cli, settings))
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("QUILL").separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(&cli.overrides);

    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    server: RawServerSettings,
    upstream: RawUpstreamSettings,
    cache: RawCacheSettings,
    http: RawHttpSettings,
    logging: RawLoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawServerSettings {
    host: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawUpstreamSettings {
    api_key: Option<String>,
    database_id: Option<String>,
    base_url: Option<String>,
    version: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawCacheSettings {
    list_ttl_secs: Option<u64>,
    content_ttl_secs: Option<u64>,
    post_ttl_secs: Option<u64>,
    metadata_ttl_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawHttpSettings {
    allowed_origins: Option<Vec<String>>,
    environment: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &ServeOverrides) {
        if let Some(host) = overrides.server_host.as_ref() {
            self.server.host = Some(host.clone());
        }
        if let Some(port) = overrides.server_port {
            self.server.port = Some(port);
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let host = raw.server.host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let ip = IpAddr::from_str(&host)
            .map_err(|err| LoadError::invalid("server.host", err.to_string()))?;
        let addr = SocketAddr::new(ip, raw.server.port.unwrap_or(DEFAULT_PORT));

        let level = match raw.logging.level {
            Some(value) => LevelFilter::from_str(&value)
                .map_err(|err| LoadError::invalid("logging.level", err.to_string()))?,
            None => LevelFilter::INFO,
        };
        let format = if raw.logging.json.unwrap_or(false) {
            LogFormat::Json
        } else {
            LogFormat::Compact
        };

        let ttl = |key: &'static str, value: Option<u64>, default: u64| {
            let secs = value.unwrap_or(default);
            NonZeroU64::new(secs)
                .map(|secs| Duration::from_secs(secs.get()))
                .ok_or_else(|| LoadError::invalid(key, "time-to-live must be non-zero"))
        };

        Ok(Self {
            server: ServerSettings { addr },
            upstream: UpstreamSettings {
                api_key: raw.upstream.api_key.unwrap_or_default(),
                database_id: raw.upstream.database_id.unwrap_or_default(),
                base_url: raw
                    .upstream
                    .base_url
                    .unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string()),
                version: raw
                    .upstream
                    .version
                    .unwrap_or_else(|| DEFAULT_UPSTREAM_VERSION.to_string()),
            },
            cache: CacheSettings {
                list_ttl: ttl(
                    "cache.list_ttl_secs",
                    raw.cache.list_ttl_secs,
                    DEFAULT_LIST_TTL_SECS,
                )?,
                content_ttl: ttl(
                    "cache.content_ttl_secs",
                    raw.cache.content_ttl_secs,
                    DEFAULT_CONTENT_TTL_SECS,
                )?,
                post_ttl: ttl(
                    "cache.post_ttl_secs",
                    raw.cache.post_ttl_secs,
                    DEFAULT_POST_TTL_SECS,
                )?,
                metadata_ttl: ttl(
                    "cache.metadata_ttl_secs",
                    raw.cache.metadata_ttl_secs,
                    DEFAULT_METADATA_TTL_SECS,
                )?,
            },
            http: HttpSettings {
                allowed_origins: raw.http.allowed_origins.unwrap_or_else(default_allowed_origins),
                environment: raw
                    .http
                    .environment
                    .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            },
            logging: LoggingSettings { level, format },
        })
    }
}

#[cfg(test)]
mod tests;
