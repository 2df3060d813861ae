//! Request body extraction and error responses.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// JSON error body returned for rejected requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error type.
    pub error: String,
    /// Detailed error message.
    pub message: String,
}

/// Errors raised before a request reaches the log store.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body could not be read (e.g. it exceeded the size limit).
    #[error("Failed to read request body: {0}")]
    UnreadableBody(#[from] BytesRejection),

    /// The body is not valid JSON of the expected shape.
    #[error("Error decoding JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnreadableBody(rejection) => rejection.status(),
            Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::UnreadableBody(_) => "unreadable_body",
            Self::InvalidJson(_) => "invalid_json",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Rejected request");
        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Extracts a JSON body. The request's `Content-Type` is not checked.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(Self(value))
    }
}
