//! `SQLite` connection pool setup and migration runner.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opening statement for read-then-write transactions.
///
/// Takes the write lock up front so that two such transactions queue on the
/// busy timeout instead of failing on a lock upgrade.
pub(crate) const BEGIN_IMMEDIATE: &str = "BEGIN IMMEDIATE";

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:cinehub.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    /// Open the database described by this configuration.
    ///
    /// The database file is created when missing and every pending migration
    /// is applied before the pool is handed out.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the URL is invalid, or the connection or
    /// migrations fail.
    pub async fn build(self) -> Result<Database, StorageError> {
        let options = SqliteConnectOptions::from_str(&self.database_url)?
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT);
        Database::open(options).await
    }
}

/// Owner of the `SQLite` connection pool.
///
/// Opened once at startup; repositories receive clones of the pool and the
/// owner closes it at shutdown.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    async fn open(options: SqliteConnectOptions) -> Result<Self, StorageError> {
        let pool = SqlitePool::connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!("database migrations applied");

        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every connection, waiting for in-flight queries to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Opens a migrated database in a file under `dir`.
#[cfg(test)]
pub(crate) async fn file_backed(dir: &std::path::Path) -> Database {
    Config {
        database_url: format!("sqlite://{}", dir.join("cinehub.db").display()),
    }
    .build()
    .await
    .unwrap()
}
