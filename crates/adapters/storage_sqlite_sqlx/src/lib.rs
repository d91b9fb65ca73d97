//! # cinehub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `cinehub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Classify driver failures (uniqueness, constraint, anything else)
//!
//! ## Dependency rule
//! Depends on `cinehub-app` (for port traits) and `cinehub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod genre_repo;
pub mod movie_repo;
pub mod pool;

pub use genre_repo::SqliteGenreRepository;
pub use movie_repo::SqliteMovieRepository;
pub use pool::{Config, Database};
