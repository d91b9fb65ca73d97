//! Shared application state for axum handlers.

use std::sync::Arc;

use cinehub_app::ports::{GenreRepository, MovieRepository};
use cinehub_app::services::genre_service::GenreService;
use cinehub_app::services::movie_service::MovieService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<MR, GR> {
    /// Movie CRUD service.
    pub movie_service: Arc<MovieService<MR>>,
    /// Genre CRUD service.
    pub genre_service: Arc<GenreService<GR>>,
}

impl<MR, GR> Clone for AppState<MR, GR> {
    fn clone(&self) -> Self {
        Self {
            movie_service: Arc::clone(&self.movie_service),
            genre_service: Arc::clone(&self.genre_service),
        }
    }
}

impl<MR, GR> AppState<MR, GR>
where
    MR: MovieRepository + Send + Sync + 'static,
    GR: GenreRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(movie_service: MovieService<MR>, genre_service: GenreService<GR>) -> Self {
        Self {
            movie_service: Arc::new(movie_service),
            genre_service: Arc::new(genre_service),
        }
    }
}
