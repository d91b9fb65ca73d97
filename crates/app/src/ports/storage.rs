//! Storage port — repository traits for persistence.
//!
//! Every listing returns records in insertion order. Lookups signal a missing
//! record with `None` / `false` rather than an error; the services decide
//! what a miss means.

use std::future::Future;

use cinehub_domain::error::CineHubError;
use cinehub_domain::genre::{Genre, GenreDraft};
use cinehub_domain::id::{GenreId, MovieId};
use cinehub_domain::movie::{Movie, MovieDraft};

/// Repository for persisting and querying [`Movie`]s.
pub trait MovieRepository {
    /// Persist a new movie and return it as stored.
    fn create(&self, movie: Movie) -> impl Future<Output = Result<Movie, CineHubError>> + Send;

    /// Get a movie by its unique identifier.
    fn get_by_id(
        &self,
        id: MovieId,
    ) -> impl Future<Output = Result<Option<Movie>, CineHubError>> + Send;

    /// Get all movies.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Movie>, CineHubError>> + Send;

    /// Get every movie whose tag list contains `genre`.
    fn find_by_genre(
        &self,
        genre: &str,
    ) -> impl Future<Output = Result<Vec<Movie>, CineHubError>> + Send;

    /// Replace the fields of movie `id` with `draft`.
    ///
    /// Returns the movie as it was *before* the update, or `None` when no
    /// movie has that id.
    fn update(
        &self,
        id: MovieId,
        draft: MovieDraft,
    ) -> impl Future<Output = Result<Option<Movie>, CineHubError>> + Send;

    /// Delete a movie, returning whether it existed.
    fn delete(&self, id: MovieId) -> impl Future<Output = Result<bool, CineHubError>> + Send;
}

/// Repository for persisting and querying [`Genre`]s.
///
/// Implementations must report a name collision as
/// [`CineHubError::Duplicate`].
pub trait GenreRepository {
    /// Persist a new genre and return it as stored.
    fn create(&self, genre: Genre) -> impl Future<Output = Result<Genre, CineHubError>> + Send;

    /// Get a genre by its unique identifier.
    fn get_by_id(
        &self,
        id: GenreId,
    ) -> impl Future<Output = Result<Option<Genre>, CineHubError>> + Send;

    /// Get all genres.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Genre>, CineHubError>> + Send;

    /// Replace the fields of genre `id` with `draft`.
    ///
    /// Returns the genre as it was *before* the update, or `None` when no
    /// genre has that id.
    fn update(
        &self,
        id: GenreId,
        draft: GenreDraft,
    ) -> impl Future<Output = Result<Option<Genre>, CineHubError>> + Send;

    /// Delete a genre, returning whether it existed.
    fn delete(&self, id: GenreId) -> impl Future<Output = Result<bool, CineHubError>> + Send;
}
