use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

/// Handler error. Client errors carry the status and message the caller sees,
/// anything else is a 500.
#[derive(Debug)]
pub enum AppError {
    Client(StatusCode, String),
    Internal(anyhow::Error),
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::Client(StatusCode::BAD_REQUEST, msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Client(StatusCode::UNAUTHORIZED, msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Client(StatusCode::FORBIDDEN, msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::Client(StatusCode::NOT_FOUND, msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Client(status, _) => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            Self::Client(_, msg) => msg,
            Self::Internal(err) => {
                tracing::error!("{err}\n\n{}", err.backtrace());
                err.to_string()
            }
        };

        (status, Json(json!({ "error": msg }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
