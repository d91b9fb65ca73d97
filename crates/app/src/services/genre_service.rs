//! Genre service — use-cases for managing genres.

use cinehub_domain::error::{CineHubError, NotFoundError};
use cinehub_domain::genre::{Genre, GenreDraft};
use cinehub_domain::id::GenreId;

use crate::ports::GenreRepository;

const ENTITY: &str = "Genre";

/// Application service for genre CRUD operations.
///
/// Deleting or renaming a genre never touches the movies tagged with it.
pub struct GenreService<R> {
    repo: R,
}

impl<R: GenreRepository> GenreService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new genre built from `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`CineHubError::Validation`] if invariants fail,
    /// [`CineHubError::Duplicate`] if the name is taken, or a storage error.
    #[tracing::instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create_genre(&self, draft: GenreDraft) -> Result<Genre, CineHubError> {
        let genre = draft.into_genre(GenreId::new())?;
        self.repo.create(genre).await
    }

    /// Look up a genre by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CineHubError::NotFound`] when no genre with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_genre(&self, id: GenreId) -> Result<Genre, CineHubError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::record(ENTITY, id).into())
    }

    /// List all genres in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_genres(&self) -> Result<Vec<Genre>, CineHubError> {
        self.repo.get_all().await
    }

    /// Rename genre `id` and return the genre as it was before.
    ///
    /// # Errors
    ///
    /// Returns [`CineHubError::Validation`] if invariants fail,
    /// [`CineHubError::Duplicate`] if the new name is taken,
    /// [`CineHubError::NotFound`] when no genre with `id` exists, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_genre(&self, id: GenreId, draft: GenreDraft) -> Result<Genre, CineHubError> {
        draft.validate()?;
        self.repo
            .update(id, draft)
            .await?
            .ok_or_else(|| NotFoundError::record(ENTITY, id).into())
    }

    /// Delete a genre by id.
    ///
    /// # Errors
    ///
    /// Returns [`CineHubError::NotFound`] when no genre with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_genre(&self, id: GenreId) -> Result<(), CineHubError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(NotFoundError::record(ENTITY, id).into())
        }
    }
}
