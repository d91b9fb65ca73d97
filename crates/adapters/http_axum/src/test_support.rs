//! In-memory repositories and a request driver for handler tests.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use cinehub_app::ports::{GenreRepository, MovieRepository};
use cinehub_app::services::genre_service::GenreService;
use cinehub_app::services::movie_service::MovieService;
use cinehub_domain::error::{CineHubError, DuplicateError};
use cinehub_domain::genre::{Genre, GenreDraft};
use cinehub_domain::id::{GenreId, MovieId};
use cinehub_domain::movie::{Movie, MovieDraft};

use crate::state::AppState;

pub fn inception_payload() -> Value {
    json!({
        "title": "Inception",
        "description": "A mind-bending science fiction thriller",
        "releaseDate": "2010-07-16",
        "genre": ["Action", "Sci-Fi", "Thriller"]
    })
}

#[derive(Default)]
pub struct InMemoryMovieRepo {
    store: Mutex<Vec<Movie>>,
    writes: Arc<AtomicUsize>,
}

impl MovieRepository for InMemoryMovieRepo {
    fn create(&self, movie: Movie) -> impl Future<Output = Result<Movie, CineHubError>> + Send {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.store.lock().unwrap().push(movie.clone());
        async { Ok(movie) }
    }

    fn get_by_id(
        &self,
        id: MovieId,
    ) -> impl Future<Output = Result<Option<Movie>, CineHubError>> + Send {
        let result = self.store.lock().unwrap().iter().find(|m| m.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Movie>, CineHubError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }

    fn find_by_genre(
        &self,
        genre: &str,
    ) -> impl Future<Output = Result<Vec<Movie>, CineHubError>> + Send {
        let result: Vec<Movie> = self
            .store
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.has_genre(genre))
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn update(
        &self,
        id: MovieId,
        draft: MovieDraft,
    ) -> impl Future<Output = Result<Option<Movie>, CineHubError>> + Send {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut store = self.store.lock().unwrap();
        let result = store.iter_mut().find(|m| m.id == id).map(|slot| {
            let previous = slot.clone();
            *slot = draft.apply_to(&previous);
            previous
        });
        async { Ok(result) }
    }

    fn delete(&self, id: MovieId) -> impl Future<Output = Result<bool, CineHubError>> + Send {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut store = self.store.lock().unwrap();
        let before = store.len();
        store.retain(|m| m.id != id);
        let existed = store.len() != before;
        async move { Ok(existed) }
    }
}

#[derive(Default)]
pub struct InMemoryGenreRepo {
    store: Mutex<Vec<Genre>>,
    writes: Arc<AtomicUsize>,
}

fn name_taken() -> CineHubError {
    DuplicateError {
        entity: "Genre",
        field: "name",
    }
    .into()
}

impl GenreRepository for InMemoryGenreRepo {
    fn create(&self, genre: Genre) -> impl Future<Output = Result<Genre, CineHubError>> + Send {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut store = self.store.lock().unwrap();
        let result = if store.iter().any(|g| g.name == genre.name) {
            Err(name_taken())
        } else {
            store.push(genre.clone());
            Ok(genre)
        };
        async { result }
    }

    fn get_by_id(
        &self,
        id: GenreId,
    ) -> impl Future<Output = Result<Option<Genre>, CineHubError>> + Send {
        let result = self.store.lock().unwrap().iter().find(|g| g.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Genre>, CineHubError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }

    fn update(
        &self,
        id: GenreId,
        draft: GenreDraft,
    ) -> impl Future<Output = Result<Option<Genre>, CineHubError>> + Send {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut store = self.store.lock().unwrap();
        let result = if store.iter().any(|g| g.id != id && g.name == draft.name) {
            Err(name_taken())
        } else {
            Ok(store.iter_mut().find(|g| g.id == id).map(|slot| {
                let previous = slot.clone();
                slot.name = draft.name;
                previous
            }))
        };
        async { result }
    }

    fn delete(&self, id: GenreId) -> impl Future<Output = Result<bool, CineHubError>> + Send {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut store = self.store.lock().unwrap();
        let before = store.len();
        store.retain(|g| g.id != id);
        let existed = store.len() != before;
        async move { Ok(existed) }
    }
}

fn unavailable() -> CineHubError {
    CineHubError::Storage("store unavailable".into())
}

/// Movie store whose every call fails with a storage error.
pub struct FailingMovieRepo;

impl MovieRepository for FailingMovieRepo {
    async fn create(&self, _movie: Movie) -> Result<Movie, CineHubError> {
        Err(unavailable())
    }
    async fn get_by_id(&self, _id: MovieId) -> Result<Option<Movie>, CineHubError> {
        Err(unavailable())
    }
    async fn get_all(&self) -> Result<Vec<Movie>, CineHubError> {
        Err(unavailable())
    }
    async fn find_by_genre(&self, _genre: &str) -> Result<Vec<Movie>, CineHubError> {
        Err(unavailable())
    }
    async fn update(
        &self,
        _id: MovieId,
        _draft: MovieDraft,
    ) -> Result<Option<Movie>, CineHubError> {
        Err(unavailable())
    }
    async fn delete(&self, _id: MovieId) -> Result<bool, CineHubError> {
        Err(unavailable())
    }
}

/// Genre store whose every call fails with a storage error.
pub struct FailingGenreRepo;

impl GenreRepository for FailingGenreRepo {
    async fn create(&self, _genre: Genre) -> Result<Genre, CineHubError> {
        Err(unavailable())
    }
    async fn get_by_id(&self, _id: GenreId) -> Result<Option<Genre>, CineHubError> {
        Err(unavailable())
    }
    async fn get_all(&self) -> Result<Vec<Genre>, CineHubError> {
        Err(unavailable())
    }
    async fn update(
        &self,
        _id: GenreId,
        _draft: GenreDraft,
    ) -> Result<Option<Genre>, CineHubError> {
        Err(unavailable())
    }
    async fn delete(&self, _id: GenreId) -> Result<bool, CineHubError> {
        Err(unavailable())
    }
}

/// The full router over test repositories, driven with `oneshot`.
pub struct TestApp {
    router: Router,
    movie_writes: Arc<AtomicUsize>,
    genre_writes: Arc<AtomicUsize>,
}

impl TestApp {
    pub fn new<MR, GR>(movie_repo: MR, genre_repo: GR) -> Self
    where
        MR: MovieRepository + Send + Sync + 'static,
        GR: GenreRepository + Send + Sync + 'static,
    {
        let state = AppState::new(MovieService::new(movie_repo), GenreService::new(genre_repo));
        Self {
            router: crate::router::build(state),
            movie_writes: Arc::default(),
            genre_writes: Arc::default(),
        }
    }

    /// Both stores in memory, with their writes counted.
    pub fn in_memory() -> Self {
        let movie_repo = InMemoryMovieRepo::default();
        let genre_repo = InMemoryGenreRepo::default();
        let movie_writes = Arc::clone(&movie_repo.writes);
        let genre_writes = Arc::clone(&genre_repo.writes);
        Self {
            movie_writes,
            genre_writes,
            ..Self::new(movie_repo, genre_repo)
        }
    }

    pub fn movie_writes(&self) -> usize {
        self.movie_writes.load(Ordering::SeqCst)
    }

    pub fn genre_writes(&self) -> usize {
        self.genre_writes.load(Ordering::SeqCst)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send("DELETE", uri, None).await
    }

    /// Sends a request with a raw body and content type.
    pub async fn send_raw(
        &self,
        method: &str,
        uri: &str,
        content_type: &str,
        body: &str,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.dispatch(request).await
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        self.dispatch(request).await
    }

    /// Non-JSON bodies come back as a JSON string.
    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, body)
    }
}
