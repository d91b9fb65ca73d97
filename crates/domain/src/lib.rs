//! # cinehub-domain
//!
//! Pure domain model for the cinehub movie catalogue.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error taxonomy, calendar dates
//! - Define **Movies** (title, description, release date, genre tags)
//! - Define **Genres** (uniquely named tags that movies refer to by value)
//! - Define the declarative **payload schemas** checked before any write
//! - Contain all record-level invariant enforcement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod schema;
pub mod time;

pub mod genre;
pub mod movie;
