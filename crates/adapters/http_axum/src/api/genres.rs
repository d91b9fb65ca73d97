//! JSON REST handlers for genres.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use cinehub_app::ports::{GenreRepository, MovieRepository};
use cinehub_domain::genre::{Genre, GenreDraft};
use cinehub_domain::id::GenreId;

use crate::api::{Data, ListResponse};
use crate::error::ApiError;
use crate::extract::{PathParam, Validated, parse_id};
use crate::state::AppState;

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Data<Genre>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Data<Genre>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Data::json("Genre deleted successfully").into_response(),
        }
    }
}

/// `GET /genres`
pub async fn list<MR, GR>(
    State(state): State<AppState<MR, GR>>,
) -> Result<ListResponse<Genre>, ApiError>
where
    MR: MovieRepository + Send + Sync + 'static,
    GR: GenreRepository + Send + Sync + 'static,
{
    let genres = state.genre_service.list_genres().await?;
    Ok(ListResponse::from_items(genres, "Genres not added yet"))
}

/// `GET /genres/:id`
pub async fn get<MR, GR>(
    State(state): State<AppState<MR, GR>>,
    PathParam(id): PathParam<String>,
) -> Result<GetResponse, ApiError>
where
    MR: MovieRepository + Send + Sync + 'static,
    GR: GenreRepository + Send + Sync + 'static,
{
    let genre_id: GenreId = parse_id(&id)?;
    let genre = state.genre_service.get_genre(genre_id).await?;
    Ok(GetResponse::Ok(Data::json(genre)))
}

/// `POST /genres`
pub async fn create<MR, GR>(
    State(state): State<AppState<MR, GR>>,
    Validated(draft): Validated<GenreDraft>,
) -> Result<CreateResponse, ApiError>
where
    MR: MovieRepository + Send + Sync + 'static,
    GR: GenreRepository + Send + Sync + 'static,
{
    let created = state.genre_service.create_genre(draft).await?;
    Ok(CreateResponse::Created(Data::json(created)))
}

/// `PUT /genres/:id`
///
/// Answers with the genre as it was before the rename.
pub async fn update<MR, GR>(
    State(state): State<AppState<MR, GR>>,
    PathParam(id): PathParam<String>,
    Validated(draft): Validated<GenreDraft>,
) -> Result<GetResponse, ApiError>
where
    MR: MovieRepository + Send + Sync + 'static,
    GR: GenreRepository + Send + Sync + 'static,
{
    let genre_id: GenreId = parse_id(&id)?;
    let previous = state.genre_service.update_genre(genre_id, draft).await?;
    Ok(GetResponse::Ok(Data::json(previous)))
}

/// `DELETE /genres/:id`
pub async fn delete<MR, GR>(
    State(state): State<AppState<MR, GR>>,
    PathParam(id): PathParam<String>,
) -> Result<DeleteResponse, ApiError>
where
    MR: MovieRepository + Send + Sync + 'static,
    GR: GenreRepository + Send + Sync + 'static,
{
    let genre_id: GenreId = parse_id(&id)?;
    state.genre_service.delete_genre(genre_id).await?;
    Ok(DeleteResponse::Deleted)
}
