//! Request extractors shared by the resource handlers.

use std::str::FromStr;

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use cinehub_domain::error::{NotFoundError, StatusError};
use cinehub_domain::genre::{GENRE_SCHEMA, GenreDraft};
use cinehub_domain::movie::{MOVIE_SCHEMA, MovieDraft};
use cinehub_domain::schema::Schema;

use crate::error::ApiError;

/// A request body with a declared [`Schema`].
pub trait Payload: DeserializeOwned {
    const SCHEMA: Schema;
}

impl Payload for MovieDraft {
    const SCHEMA: Schema = MOVIE_SCHEMA;
}

impl Payload for GenreDraft {
    const SCHEMA: Schema = GENRE_SCHEMA;
}

/// JSON body that passed its schema before the handler sees it.
///
/// A body that is not JSON is rejected with the status the JSON extractor
/// picked; a body that breaks the schema is rejected with the first
/// violation. Either way the handler never runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    /// Consumes the wrapper and returns the validated payload.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: Payload + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<serde_json::Value>::from_request(req, state).await?;

        T::SCHEMA.validate(&value)?;

        let payload = serde_json::from_value(value)
            .map_err(|err| StatusError::new(400, err.to_string()))?;
        Ok(Self(payload))
    }
}

/// Path parameters whose rejections go through [`ApiError`].
///
/// A segment that does not percent-decode to UTF-8 answers with the same
/// JSON shape as every other client error.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

/// Parse an id path segment, treating anything unparseable as "not found".
///
/// # Errors
///
/// Returns [`ApiError`] wrapping [`NotFoundError::malformed`].
pub fn parse_id<I: FromStr>(raw: &str) -> Result<I, ApiError> {
    I::from_str(raw).map_err(|_| NotFoundError::malformed(raw).into())
}
