//! HTTP error response mapping.
//!
//! This is the last stage every failed request goes through. Classification
//! is by error kind only:
//!
//! | kind | status | body |
//! |---|---|---|
//! | payload schema | 400 | `{"error": <first violation>}` |
//! | record validation | 400 | `{"error": "Fill in all required fields"}` |
//! | duplicate | 400 | `{"error": "Field must be unique"}` |
//! | not found | 404 | `{"error": "<Resource> not found"}` or `{"error": "Not found"}` |
//! | explicit status | that status | `{"message": <message>}` |
//! | anything else | 500 | `{"message": "Internal Server Error"}` |

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use cinehub_domain::error::{CineHubError, NotFoundError, PayloadError, StatusError};

const MISSING_FIELDS: &str = "Fill in all required fields";
const NOT_UNIQUE: &str = "Field must be unique";
const NOT_FOUND: &str = "Not found";
const INTERNAL: &str = "Internal Server Error";

/// JSON body for client errors the API classified itself.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// JSON body for failures that carry their own status, and for server faults.
#[derive(Serialize)]
struct MessageBody {
    message: String,
}

/// Maps [`CineHubError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(CineHubError);

impl ApiError {
    /// Borrow the classified error.
    #[must_use]
    pub fn kind(&self) -> &CineHubError {
        &self.0
    }
}

impl From<CineHubError> for ApiError {
    fn from(err: CineHubError) -> Self {
        Self(err)
    }
}

impl From<PayloadError> for ApiError {
    fn from(err: PayloadError) -> Self {
        Self(err.into())
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self(err.into())
    }
}

impl From<StatusError> for ApiError {
    fn from(err: StatusError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        StatusError::new(rejection.status().as_u16(), rejection.body_text()).into()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        StatusError::new(rejection.status().as_u16(), rejection.body_text()).into()
    }
}

fn not_found_message(err: &NotFoundError) -> String {
    err.entity
        .map_or_else(|| NOT_FOUND.to_string(), |entity| format!("{entity} not found"))
}

fn client_error(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: error.into(),
        }),
    )
        .into_response()
}

fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(MessageBody {
            message: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            CineHubError::Payload(err) => client_error(StatusCode::BAD_REQUEST, err.to_string()),
            CineHubError::Validation(err) => {
                tracing::debug!(error = %err, "record failed validation");
                client_error(StatusCode::BAD_REQUEST, MISSING_FIELDS)
            }
            CineHubError::Duplicate(err) => {
                tracing::debug!(error = %err, "uniqueness violated");
                client_error(StatusCode::BAD_REQUEST, NOT_UNIQUE)
            }
            CineHubError::NotFound(err) => {
                client_error(StatusCode::NOT_FOUND, not_found_message(err))
            }
            CineHubError::Status(err) => match StatusCode::from_u16(err.status) {
                Ok(status) => message(status, err.message.clone()),
                Err(_) => {
                    tracing::error!(status = err.status, "invalid status code in error");
                    message(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL)
                }
            },
            CineHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                message(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinehub_domain::error::{DuplicateError, ValidationError};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    async fn render(err: impl Into<ApiError>) -> (StatusCode, Value) {
        let response = err.into().into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn should_echo_payload_violation_message() {
        let (status, body) = render(PayloadError::Required("title".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "\"title\" is required" }));
    }

    #[tokio::test]
    async fn should_hide_record_validation_detail() {
        let (status, body) =
            render(CineHubError::from(ValidationError::EmptyGenreList)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Fill in all required fields" }));
    }

    #[tokio::test]
    async fn should_map_duplicate_to_bad_request() {
        let err = CineHubError::from(DuplicateError {
            entity: "Genre",
            field: "name",
        });
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Field must be unique" }));
    }

    #[tokio::test]
    async fn should_name_resource_when_record_missing() {
        let (status, body) = render(NotFoundError::record("Genre", "x")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Genre not found" }));
    }

    #[tokio::test]
    async fn should_answer_generic_not_found_for_malformed_id() {
        let (status, body) = render(NotFoundError::malformed("123")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Not found" }));
    }

    #[tokio::test]
    async fn should_use_carried_status_and_message() {
        let (status, body) = render(StatusError::new(401, "error")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "message": "error" }));
    }

    #[tokio::test]
    async fn should_fall_back_to_500_for_out_of_range_status() {
        let (status, body) = render(StatusError::new(1000, "weird")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn should_never_leak_storage_details() {
        let err = CineHubError::Storage("disk on fire".into());
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Internal Server Error" }));
    }
}
