//! JSON REST handlers for movies.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use cinehub_app::ports::{GenreRepository, MovieRepository};
use cinehub_domain::id::MovieId;
use cinehub_domain::movie::{Movie, MovieDraft};

use crate::api::{Data, ListResponse};
use crate::error::ApiError;
use crate::extract::{PathParam, Validated, parse_id};
use crate::state::AppState;

const NONE_YET: &str = "Movies not added yet";
const NONE_FOR_GENRE: &str = "Movies by this genre not added yet";
const DELETED: &str = "Movie deleted successfully";

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Data<Movie>>),
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
    Created(Json<Data<Movie>>),
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
            Self::Deleted => Data::json(DELETED).into_response(),
        }
    }
}

/// `GET /movies`
pub async fn list<MR, GR>(
    State(state): State<AppState<MR, GR>>,
) -> Result<ListResponse<Movie>, ApiError>
where
    MR: MovieRepository + Send + Sync + 'static,
    GR: GenreRepository + Send + Sync + 'static,
{
    let movies = state.movie_service.list_movies().await?;
    Ok(ListResponse::from_items(movies, NONE_YET))
}

/// `GET /movies/:id`
pub async fn get<MR, GR>(
    State(state): State<AppState<MR, GR>>,
    PathParam(id): PathParam<String>,
) -> Result<GetResponse, ApiError>
where
    MR: MovieRepository + Send + Sync + 'static,
    GR: GenreRepository + Send + Sync + 'static,
{
    let movie_id: MovieId = parse_id(&id)?;
    let movie = state.movie_service.get_movie(movie_id).await?;
    Ok(GetResponse::Ok(Data::json(movie)))
}

/// `GET /movies/genre/:genre_name`
pub async fn list_by_genre<MR, GR>(
    State(state): State<AppState<MR, GR>>,
    PathParam(genre_name): PathParam<String>,
) -> Result<ListResponse<Movie>, ApiError>
where
    MR: MovieRepository + Send + Sync + 'static,
    GR: GenreRepository + Send + Sync + 'static,
{
    let movies = state
        .movie_service
        .list_movies_by_genre(&genre_name)
        .await?;
    Ok(ListResponse::from_items(movies, NONE_FOR_GENRE))
}

/// `POST /movies`
pub async fn create<MR, GR>(
    State(state): State<AppState<MR, GR>>,
    Validated(draft): Validated<MovieDraft>,
) -> Result<CreateResponse, ApiError>
where
    MR: MovieRepository + Send + Sync + 'static,
    GR: GenreRepository + Send + Sync + 'static,
{
    let created = state.movie_service.create_movie(draft).await?;
    Ok(CreateResponse::Created(Data::json(created)))
}

/// `PUT /movies/:id`
///
/// Answers with the movie as it was *before* the update.
pub async fn update<MR, GR>(
    State(state): State<AppState<MR, GR>>,
    PathParam(id): PathParam<String>,
    Validated(draft): Validated<MovieDraft>,
) -> Result<GetResponse, ApiError>
where
    MR: MovieRepository + Send + Sync + 'static,
    GR: GenreRepository + Send + Sync + 'static,
{
    let movie_id: MovieId = parse_id(&id)?;
    let previous = state.movie_service.update_movie(movie_id, draft).await?;
    Ok(GetResponse::Ok(Data::json(previous)))
}

/// `DELETE /movies/:id`
pub async fn delete<MR, GR>(
    State(state): State<AppState<MR, GR>>,
    PathParam(id): PathParam<String>,
) -> Result<DeleteResponse, ApiError>
where
    MR: MovieRepository + Send + Sync + 'static,
    GR: GenreRepository + Send + Sync + 'static,
{
    let movie_id: MovieId = parse_id(&id)?;
    state.movie_service.delete_movie(movie_id).await?;
    Ok(DeleteResponse::Deleted)
}
