//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use cinehub_app::ports::{GenreRepository, MovieRepository};
use cinehub_domain::error::StatusError;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the resource routes with a plain-text greeting at `/`. Requests
/// that match no route, or match a path under another method, answer
/// `404 {"message": "Not Found"}`. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<MR, GR>(state: AppState<MR, GR>) -> Router
where
    MR: MovieRepository + Send + Sync + 'static,
    GR: GenreRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(hello))
        .merge(crate::api::routes())
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn hello() -> &'static str {
    "Hello World!"
}

async fn not_found() -> ApiError {
    StatusError::new(404, "Not Found").into()
}
