//! `SQLite` implementation of [`GenreRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use cinehub_app::ports::GenreRepository;
use cinehub_domain::error::{CineHubError, DuplicateError};
use cinehub_domain::genre::{Genre, GenreDraft};
use cinehub_domain::id::GenreId;

use crate::error::StorageError;
use crate::pool::BEGIN_IMMEDIATE;

/// Wrapper for converting database rows into domain [`Genre`].
struct Wrapper(Genre);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Genre> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;

        let id = GenreId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Genre { id, name }))
    }
}

const INSERT: &str = "INSERT INTO genres (id, name) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM genres WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM genres ORDER BY rowid";
const UPDATE: &str = "UPDATE genres SET name = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM genres WHERE id = ?";

const NAME_TAKEN: DuplicateError = DuplicateError {
    entity: "Genre",
    field: "name",
};

/// `SQLite`-backed genre repository.
pub struct SqliteGenreRepository {
    pool: SqlitePool,
}

impl SqliteGenreRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl GenreRepository for SqliteGenreRepository {
    fn create(&self, genre: Genre) -> impl Future<Output = Result<Genre, CineHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(genre.id.to_string())
                .bind(&genre.name)
                .execute(&pool)
                .await
                .map_err(|err| StorageError::from(err).unique_as(NAME_TAKEN))?;

            Ok(genre)
        }
    }

    fn get_by_id(
        &self,
        id: GenreId,
    ) -> impl Future<Output = Result<Option<Genre>, CineHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Genre>, CineHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: GenreId,
        draft: GenreDraft,
    ) -> impl Future<Output = Result<Option<Genre>, CineHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool
                .begin_with(BEGIN_IMMEDIATE)
                .await
                .map_err(StorageError::from)?;

            let previous: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            let Some(Wrapper(previous)) = previous else {
                return Ok(None);
            };

            sqlx::query(UPDATE)
                .bind(&draft.name)
                .bind(id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(|err| StorageError::from(err).unique_as(NAME_TAKEN))?;

            tx.commit().await.map_err(StorageError::from)?;

            Ok(Some(previous))
        }
    }

    fn delete(&self, id: GenreId) -> impl Future<Output = Result<bool, CineHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
