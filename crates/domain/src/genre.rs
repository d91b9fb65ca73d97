//! Genre — a uniquely named tag movies can be filed under.

use serde::{Deserialize, Serialize};

use crate::error::{CineHubError, ValidationError};
use crate::id::GenreId;
use crate::schema::{Field, FieldKind, Schema};

/// Shape every genre create/update payload must match.
pub const GENRE_SCHEMA: Schema = Schema::new(&[Field::new("name", FieldKind::Text)]);

/// A stored genre. `name` is unique across all genres.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

impl Genre {
    /// Create a builder for constructing a [`Genre`].
    #[must_use]
    pub fn builder() -> GenreBuilder {
        GenreBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CineHubError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), CineHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Field values of a genre create or update request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenreDraft {
    pub name: String,
}

impl GenreDraft {
    /// # Errors
    ///
    /// Returns [`CineHubError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), CineHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Attach `id` and validate the resulting record.
    ///
    /// # Errors
    ///
    /// Returns [`CineHubError::Validation`] if invariants fail.
    pub fn into_genre(self, id: GenreId) -> Result<Genre, CineHubError> {
        Genre::builder().id(id).name(self.name).build()
    }
}

/// Step-by-step builder for [`Genre`].
#[derive(Debug, Default)]
pub struct GenreBuilder {
    id: Option<GenreId>,
    name: Option<String>,
}

impl GenreBuilder {
    #[must_use]
    pub fn id(mut self, id: GenreId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder, validate, and return a [`Genre`].
    ///
    /// # Errors
    ///
    /// Returns [`CineHubError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Genre, CineHubError> {
        let genre = Genre {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
        };
        genre.validate()?;
        Ok(genre)
    }
}
