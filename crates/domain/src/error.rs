//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CineHubError`]
//! via `#[from]`. The variants are ordered by how the HTTP edge classifies
//! them, most specific first.

/// Every failure that can reach the edge of a request.
#[derive(Debug, thiserror::Error)]
pub enum CineHubError {
    /// The request payload does not match the resource schema.
    #[error("invalid payload")]
    Payload(#[from] PayloadError),

    /// A record broke one of its invariants on the way into the store.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A uniqueness constraint was violated.
    #[error("duplicate value")]
    Duplicate(#[from] DuplicateError),

    /// The referenced record does not exist.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// A failure that already carries the status and message to report.
    #[error("request failed")]
    Status(#[from] StatusError),

    /// Anything the store driver reported that has no better classification.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// First violated constraint of a payload schema.
///
/// The messages quote the offending field path, e.g. `"genre[1]" must be a string`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("\"value\" must be of type object")]
    NotAnObject,
    #[error("\"{0}\" is required")]
    Required(String),
    #[error("\"{0}\" must be a string")]
    NotAString(String),
    #[error("\"{0}\" is not allowed to be empty")]
    Empty(String),
    #[error("\"{0}\" must be a valid date")]
    NotADate(String),
    #[error("\"{0}\" must be an array")]
    NotAnArray(String),
    #[error("\"{0}\" is not allowed")]
    Unknown(String),
}

/// Record-level invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("release date is required")]
    MissingReleaseDate,
    #[error("genre list must not be empty")]
    EmptyGenreList,
    #[error("genre tags must not be empty")]
    EmptyGenreTag,
    #[error("name must not be empty")]
    EmptyName,
    /// The store refused the record because of one of its own constraints.
    #[error("record rejected by the store: {0}")]
    Rejected(String),
}

/// A value that must be unique is already taken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with this {field} already exists")]
pub struct DuplicateError {
    pub entity: &'static str,
    pub field: &'static str,
}

/// A lookup by id found nothing.
///
/// `entity` is `None` when the id could not even be parsed, in which case
/// there is no way to tell which record was meant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} {id} not found", entity.unwrap_or("record"))]
pub struct NotFoundError {
    pub entity: Option<&'static str>,
    pub id: String,
}

impl NotFoundError {
    /// A well-formed id with no matching record.
    #[must_use]
    pub fn record(entity: &'static str, id: impl ToString) -> Self {
        Self {
            entity: Some(entity),
            id: id.to_string(),
        }
    }

    /// An id that is not a valid identifier for the store.
    #[must_use]
    pub fn malformed(id: impl Into<String>) -> Self {
        Self {
            entity: None,
            id: id.into(),
        }
    }
}

/// Explicit status code and client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{status}: {message}")]
pub struct StatusError {
    pub status: u16,
    pub message: String,
}

impl StatusError {
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}
