//! Movie service — use-cases for managing movies.

use cinehub_domain::error::{CineHubError, NotFoundError};
use cinehub_domain::id::MovieId;
use cinehub_domain::movie::{Movie, MovieDraft};

use crate::ports::MovieRepository;

const ENTITY: &str = "Movie";

/// Application service for movie CRUD operations.
pub struct MovieService<R> {
    repo: R,
}

impl<R: MovieRepository> MovieService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new movie built from `draft` under a freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`CineHubError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_movie(&self, draft: MovieDraft) -> Result<Movie, CineHubError> {
        let movie = draft.into_movie(MovieId::new())?;
        self.repo.create(movie).await
    }

    /// Look up a movie by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CineHubError::NotFound`] when no movie with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_movie(&self, id: MovieId) -> Result<Movie, CineHubError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::record(ENTITY, id).into())
    }

    /// List all movies in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_movies(&self) -> Result<Vec<Movie>, CineHubError> {
        self.repo.get_all().await
    }

    /// List the movies tagged with `genre`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_movies_by_genre(&self, genre: &str) -> Result<Vec<Movie>, CineHubError> {
        self.repo.find_by_genre(genre).await
    }

    /// Replace every field of movie `id` and return the movie as it was
    /// before the change.
    ///
    /// # Errors
    ///
    /// Returns [`CineHubError::Validation`] if invariants fail,
    /// [`CineHubError::NotFound`] when no movie with `id` exists, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_movie(&self, id: MovieId, draft: MovieDraft) -> Result<Movie, CineHubError> {
        draft.validate()?;
        self.repo
            .update(id, draft)
            .await?
            .ok_or_else(|| NotFoundError::record(ENTITY, id).into())
    }

    /// Delete a movie by id.
    ///
    /// # Errors
    ///
    /// Returns [`CineHubError::NotFound`] when no movie with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_movie(&self, id: MovieId) -> Result<(), CineHubError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(NotFoundError::record(ENTITY, id).into())
        }
    }
}
