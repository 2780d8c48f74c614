use std::sync::Arc;

use anyhow::Context as _;
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use url::Url;

use crate::archive::{Archive, HttpArchive};
use crate::cli::Cli;
use crate::views;

#[derive(Clone)]
pub struct AppState {
    pub archive: Arc<dyn Archive>,
}

/// Console routes, fixed paths before the `:name` captures. Unmatched paths
/// fall through to the default empty 404.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(views::general::show))
        .route("/site/", get(views::site::show_unnamed))
        .route("/process/", get(views::process::show))
        .route("/process/start", get(views::process::start))
        .route("/logs/", get(views::logs::show))
        .route("/:name/", get(views::site::show))
        .route("/:name/search", get(views::search::show))
        .route("/:name/book/:num", get(views::book::show))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(cli: Cli) -> anyhow::Result<()> {
    let base = Url::parse(&cli.backend)
        .with_context(|| format!("parse backend url: {}", cli.backend))?;
    let archive = HttpArchive::new(base).context("build backend client")?;
    let state = AppState {
        archive: Arc::new(archive),
    };

    let listener = tokio::net::TcpListener::bind(cli.addr)
        .await
        .with_context(|| format!("bind {}", cli.addr))?;
    tracing::info!(addr = %cli.addr, backend = %cli.backend, "listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
