//! Storage-specific error type wrapping sqlx errors.

use sqlx::error::ErrorKind;

use cinehub_domain::error::{CineHubError, DuplicateError, ValidationError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to encode or decode a stored JSON value.
    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StorageError {
    fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Database(sqlx::Error::Database(db)) => Some(db.kind()),
            _ => None,
        }
    }

    /// Report a unique-constraint violation as `duplicate`, anything else as usual.
    pub(crate) fn unique_as(self, duplicate: DuplicateError) -> CineHubError {
        if matches!(self.kind(), Some(ErrorKind::UniqueViolation)) {
            duplicate.into()
        } else {
            self.into()
        }
    }
}

impl From<StorageError> for CineHubError {
    fn from(err: StorageError) -> Self {
        if let StorageError::Database(sqlx::Error::Database(db)) = &err
            && matches!(
                db.kind(),
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation
            )
        {
            return ValidationError::Rejected(db.message().to_string()).into();
        }
        Self::Storage(Box::new(err))
    }
}
