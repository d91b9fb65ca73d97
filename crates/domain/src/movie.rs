//! Movie — a catalogue entry tagged with one or more genre names.

use serde::{Deserialize, Serialize};

use crate::error::{CineHubError, ValidationError};
use crate::id::MovieId;
use crate::schema::{Field, FieldKind, Schema};
use crate::time::{Date, deserialize_date};

/// Shape every movie create/update payload must match.
pub const MOVIE_SCHEMA: Schema = Schema::new(&[
    Field::new("title", FieldKind::Text),
    Field::new("description", FieldKind::Text),
    Field::new("releaseDate", FieldKind::Date),
    Field::new("genre", FieldKind::TextList),
]);

/// A stored movie.
///
/// `genre` holds genre *names*, not ids; nothing ties them to existing
/// [`Genre`](crate::genre::Genre) records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub description: String,
    pub release_date: Date,
    pub genre: Vec<String>,
}

impl Movie {
    /// Create a builder for constructing a [`Movie`].
    #[must_use]
    pub fn builder() -> MovieBuilder {
        MovieBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CineHubError::Validation`] when a text field is empty or
    /// the genre list is empty or holds an empty tag.
    pub fn validate(&self) -> Result<(), CineHubError> {
        check_fields(&self.title, &self.description, &self.genre)
    }

    /// Whether the movie is tagged with `genre`.
    #[must_use]
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre.iter().any(|tag| tag == genre)
    }
}

/// Field values of a create or update request, before an id is attached.
///
/// Create and update carry the same shape: an update replaces every field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MovieDraft {
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub release_date: Date,
    pub genre: Vec<String>,
}

impl MovieDraft {
    /// Check the same invariants as [`Movie::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`CineHubError::Validation`] on the first broken invariant.
    pub fn validate(&self) -> Result<(), CineHubError> {
        check_fields(&self.title, &self.description, &self.genre)
    }

    /// Attach `id` and validate the resulting record.
    ///
    /// # Errors
    ///
    /// Returns [`CineHubError::Validation`] if invariants fail.
    pub fn into_movie(self, id: MovieId) -> Result<Movie, CineHubError> {
        Movie::builder()
            .id(id)
            .title(self.title)
            .description(self.description)
            .release_date(self.release_date)
            .genres(self.genre)
            .build()
    }

    /// Apply the draft on top of `movie`, keeping its id.
    #[must_use]
    pub fn apply_to(self, movie: &Movie) -> Movie {
        Movie {
            id: movie.id,
            title: self.title,
            description: self.description,
            release_date: self.release_date,
            genre: self.genre,
        }
    }
}

fn check_fields(title: &str, description: &str, genre: &[String]) -> Result<(), CineHubError> {
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle.into());
    }
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription.into());
    }
    if genre.is_empty() {
        return Err(ValidationError::EmptyGenreList.into());
    }
    if genre.iter().any(String::is_empty) {
        return Err(ValidationError::EmptyGenreTag.into());
    }
    Ok(())
}

/// Step-by-step builder for [`Movie`].
#[derive(Debug, Default)]
pub struct MovieBuilder {
    id: Option<MovieId>,
    title: Option<String>,
    description: Option<String>,
    release_date: Option<Date>,
    genre: Vec<String>,
}

impl MovieBuilder {
    #[must_use]
    pub fn id(mut self, id: MovieId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn release_date(mut self, release_date: Date) -> Self {
        self.release_date = Some(release_date);
        self
    }

    /// Append a single genre tag.
    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre.push(genre.into());
        self
    }

    /// Append several genre tags, keeping their order.
    #[must_use]
    pub fn genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genre.extend(genres.into_iter().map(Into::into));
        self
    }

    /// Consume the builder, validate, and return a [`Movie`].
    ///
    /// # Errors
    ///
    /// Returns [`CineHubError::Validation`] if a required field is missing
    /// or empty.
    pub fn build(self) -> Result<Movie, CineHubError> {
        let release_date = self
            .release_date
            .ok_or(ValidationError::MissingReleaseDate)?;
        let movie = Movie {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            release_date,
            genre: self.genre,
        };
        movie.validate()?;
        Ok(movie)
    }
}
