use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

/// Body returned with every rejected request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidState(String),
    #[error("draft order must be set before starting")]
    OrderNotSet,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Validation(String),
    // Ledger and draft record disagree. Only reachable if something other than
    // set-order and make-pick wrote to the ledger.
    #[error("draft state is inconsistent: {0}")]
    Invariant(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl DraftError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidState(_) | Self::OrderNotSet | Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Invariant(_) | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DraftError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            Self::Invariant(_) | Self::Database(_) => {
                error!("Internal server error: {}", self);
                "Internal server error".to_string()
            }
            other => {
                debug!("Rejected request: {}", other);
                other.to_string()
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_keep_their_reason() {
        let resp = DraftError::Forbidden("not your turn".into()).into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        assert_eq!(
            DraftError::Conflict("player already drafted".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(DraftError::OrderNotSet.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            DraftError::NotFound("draft not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn invariant_is_a_server_error() {
        let resp = DraftError::Invariant("no slot at pick 3".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
