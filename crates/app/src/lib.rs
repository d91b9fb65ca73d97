//! # cinehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that store adapters must implement:
//!   - `MovieRepository` — CRUD plus lookup by genre tag for movies
//!   - `GenreRepository` — CRUD for genres
//! - Define **use-case services** that turn "not found" sentinels returned by
//!   the ports into typed errors:
//!   - `MovieService` — list, get, list by genre, create, replace, delete
//!   - `GenreService` — list, get, create, replace, delete
//!
//! ## Dependency rule
//! Depends on `cinehub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
