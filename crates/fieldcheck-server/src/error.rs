use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fieldcheck_core::detail::FieldErrors;
use fieldcheck_core::error::FieldcheckError;

// ---------------------------------------------------------------------------
// Validation sentinel
// ---------------------------------------------------------------------------

/// Carries field errors through the `anyhow::Error` chain so they can be
/// rendered as the response body itself.
#[derive(Debug)]
struct ValidationFailed(FieldErrors);

impl std::fmt::Display for ValidationFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: {}", self.0)
    }
}

impl std::error::Error for ValidationFailed {}

/// An extractor refused the request before a handler ran.
#[derive(Debug)]
struct Rejected {
    status: StatusCode,
    message: String,
}

impl std::fmt::Display for Rejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Rejected {}

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// 400 with the field errors map as the body.
    pub fn validation(errors: FieldErrors) -> Self {
        Self(ValidationFailed(errors).into())
    }

    /// Keep the extractor's status but render its message as `{"error": ...}`.
    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        Self(
            Rejected {
                status,
                message: message.into(),
            }
            .into(),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(v) = self.0.downcast_ref::<ValidationFailed>() {
            return (StatusCode::BAD_REQUEST, axum::Json(&v.0)).into_response();
        }

        let status = if let Some(r) = self.0.downcast_ref::<Rejected>() {
            r.status
        } else if let Some(e) = self.0.downcast_ref::<FieldcheckError>() {
            match e {
                FieldcheckError::UnknownActorKind(_) => StatusCode::BAD_REQUEST,
                FieldcheckError::SchemaNotFound(_) => StatusCode::NOT_FOUND,
                FieldcheckError::NotInitialized => StatusCode::BAD_REQUEST,
                FieldcheckError::InvalidConfig(_)
                | FieldcheckError::Io(_)
                | FieldcheckError::Yaml(_)
                | FieldcheckError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
