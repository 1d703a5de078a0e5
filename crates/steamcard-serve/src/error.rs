//! Error types for the card service.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Card service error type.
#[derive(Debug, thiserror::Error)]
pub enum CardError {
    /// The submitted identifier was empty or unusable.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// The backend had no profile for the identifier.
    #[error("not found: {0}")]
    NotFound(String),

    /// The profile backend could not be reached or misbehaved.
    #[error("backend error: {0}")]
    Backend(#[from] reqwest::Error),

    /// Rasterization or document assembly failed.
    #[error("render error: {0}")]
    Render(String),

    /// Internal server error (rendering, I/O, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for CardError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::InvalidIdentifier(msg) => (
                StatusCode::BAD_REQUEST,
                "Invalid Identifier",
                format!("The submitted Steam identifier could not be used: {msg}"),
            ),
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("No profile was found: {msg}"),
            ),
            Self::Backend(err) => {
                tracing::error!(error = %err, "backend error");
                (
                    StatusCode::BAD_GATEWAY,
                    "Backend Unavailable",
                    "The profile backend is temporarily unavailable. Please try again later."
                        .to_string(),
                )
            }
            Self::Render(msg) => {
                tracing::error!(error = %msg, "render error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Export Failed",
                    "The card could not be rendered. Please try again later.".to_string(),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) " - Steam Card Generator" }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Back to the card generator" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_invalid_identifier() {
        let err = CardError::InvalidIdentifier("empty input".to_string());
        assert_eq!(err.to_string(), "invalid identifier: empty input");
    }

    #[test]
    fn error_display_not_found() {
        let err = CardError::NotFound("user gordon".to_string());
        assert_eq!(err.to_string(), "not found: user gordon");
    }

    #[test]
    fn error_display_render() {
        let err = CardError::Render("bad pixmap".to_string());
        assert_eq!(err.to_string(), "render error: bad pixmap");
    }

    #[test]
    fn error_display_internal() {
        let err = CardError::Internal(anyhow::anyhow!("something broke"));
        assert_eq!(err.to_string(), "internal error: something broke");
    }

    #[test]
    fn error_into_response_invalid_identifier() {
        let err = CardError::InvalidIdentifier("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_into_response_not_found() {
        let err = CardError::NotFound("user xyz".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_into_response_render() {
        let err = CardError::Render("boom".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_into_response_internal() {
        let err = CardError::Internal(anyhow::anyhow!("boom"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
