//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod genres;
pub mod health;
#[allow(clippy::missing_errors_doc)]
pub mod movies;

use axum::Json;
use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Serialize;

use cinehub_app::ports::{GenreRepository, MovieRepository};

use crate::state::AppState;

/// Envelope every successful response body is wrapped in.
#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn json(data: T) -> Json<Self> {
        Json(Self { data })
    }
}

/// Response of a listing endpoint.
///
/// An empty listing is still a success, reported with a message in place of
/// the array.
pub enum ListResponse<T> {
    Ok(Json<Data<Vec<T>>>),
    Empty(&'static str),
}

impl<T> ListResponse<T> {
    /// Wrap `items`, substituting `empty_message` when there are none.
    pub fn from_items(items: Vec<T>, empty_message: &'static str) -> Self {
        if items.is_empty() {
            Self::Empty(empty_message)
        } else {
            Self::Ok(Data::json(items))
        }
    }
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Empty(message) => Data::json(message).into_response(),
        }
    }
}

/// Build the resource routes.
pub fn routes<MR, GR>() -> Router<AppState<MR, GR>>
where
    MR: MovieRepository + Send + Sync + 'static,
    GR: GenreRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health-check", get(health::check))
        // Movies
        .route(
            "/movies",
            get(movies::list::<MR, GR>).post(movies::create::<MR, GR>),
        )
        .route(
            "/movies/{id}",
            get(movies::get::<MR, GR>)
                .put(movies::update::<MR, GR>)
                .delete(movies::delete::<MR, GR>),
        )
        .route(
            "/movies/genre/{genre_name}",
            get(movies::list_by_genre::<MR, GR>),
        )
        // Genres
        .route(
            "/genres",
            get(genres::list::<MR, GR>).post(genres::create::<MR, GR>),
        )
        .route(
            "/genres/{id}",
            get(genres::get::<MR, GR>)
                .put(genres::update::<MR, GR>)
                .delete(genres::delete::<MR, GR>),
        )
}
