//! `SQLite` implementation of [`MovieRepository`].
//!
//! The genre tag list is stored as a JSON array and searched with
//! `json_each`, so tag order survives a round trip.

use std::future::Future;
use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use cinehub_app::ports::MovieRepository;
use cinehub_domain::error::CineHubError;
use cinehub_domain::id::MovieId;
use cinehub_domain::movie::{Movie, MovieDraft};
use cinehub_domain::time::format_date;

use crate::error::StorageError;
use crate::pool::BEGIN_IMMEDIATE;

/// Wrapper for converting database rows into domain [`Movie`].
struct Wrapper(Movie);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Movie> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let description: String = row.try_get("description")?;
        let release_date: String = row.try_get("release_date")?;
        let genre_json: String = row.try_get("genre")?;

        let id = MovieId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let release_date = NaiveDate::from_str(&release_date)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let genre: Vec<String> = serde_json::from_str(&genre_json)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Movie {
            id,
            title,
            description,
            release_date,
            genre,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO movies (id, title, description, release_date, genre) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM movies WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM movies ORDER BY rowid";
const SELECT_BY_GENRE: &str = "SELECT * FROM movies WHERE EXISTS (SELECT 1 FROM json_each(movies.genre) WHERE json_each.value = ?) ORDER BY rowid";
const UPDATE: &str =
    "UPDATE movies SET title = ?, description = ?, release_date = ?, genre = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM movies WHERE id = ?";

/// `SQLite`-backed movie repository.
pub struct SqliteMovieRepository {
    pool: SqlitePool,
}

impl SqliteMovieRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MovieRepository for SqliteMovieRepository {
    fn create(&self, movie: Movie) -> impl Future<Output = Result<Movie, CineHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let genre_json = serde_json::to_string(&movie.genre).map_err(StorageError::from)?;

            sqlx::query(INSERT)
                .bind(movie.id.to_string())
                .bind(&movie.title)
                .bind(&movie.description)
                .bind(format_date(movie.release_date))
                .bind(&genre_json)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(movie)
        }
    }

    fn get_by_id(
        &self,
        id: MovieId,
    ) -> impl Future<Output = Result<Option<Movie>, CineHubError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Movie>, CineHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_genre(
        &self,
        genre: &str,
    ) -> impl Future<Output = Result<Vec<Movie>, CineHubError>> + Send {
        let pool = self.pool.clone();
        let genre = genre.to_owned();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_GENRE)
                .bind(&genre)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: MovieId,
        draft: MovieDraft,
    ) -> impl Future<Output = Result<Option<Movie>, CineHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let genre_json = serde_json::to_string(&draft.genre).map_err(StorageError::from)?;
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
                .bind(&draft.title)
                .bind(&draft.description)
                .bind(format_date(draft.release_date))
                .bind(&genre_json)
                .bind(id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            tx.commit().await.map_err(StorageError::from)?;

            Ok(Some(previous))
        }
    }

    fn delete(&self, id: MovieId) -> impl Future<Output = Result<bool, CineHubError>> + Send {
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
