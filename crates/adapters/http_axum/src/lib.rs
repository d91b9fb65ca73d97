//! # cinehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for movies and genres (`/movies`, `/genres`)
//!   plus a liveness probe (`/health-check`)
//! - Check create/update payloads against their schema before any handler
//!   runs ([`extract::Validated`])
//! - Map HTTP requests into application service calls (driving adapter)
//! - Normalize every failure into a status code and JSON body ([`error::ApiError`])
//!
//! ## Response envelope
//! Successful responses wrap their payload as `{"data": ...}`. A listing with
//! nothing in it answers `200` with a descriptive string instead of `[]`.
//!
//! ## Dependency rule
//! Depends on `cinehub-app` (for port traits and services) and `cinehub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
