use std::{process, sync::Arc};

use quill::{
    application::{AppError, BlogService},
    cache::{CacheConfig, CacheStores},
    config,
    infra::{
        error::InfraError,
        http::{self, AppState},
        notion::NotionClient,
        telemetry,
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (_cli, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    let caches = Arc::new(CacheStores::new(&CacheConfig::from(&settings.cache)));
    let notion = Arc::new(NotionClient::new(&settings.upstream)?);
    let blog = Arc::new(BlogService::new(notion, caches));

    let state = AppState::new(blog, settings.http.environment.clone());
    let router = http::build_router(state, &settings.http);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;
    info!(
        target = "quill::server",
        addr = %settings.server.addr,
        environment = %settings.http.environment,
        "gateway listening"
    );

    axum::serve(listener, router.into_make_service())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    Ok(())
}
