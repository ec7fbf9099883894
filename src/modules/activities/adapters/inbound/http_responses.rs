use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::use_cases::errors::ApplicationError;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::ActivityNotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::InvalidEmail(_) | ApplicationError::Rejected(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Query strings axum cannot deserialize get the same `detail` body as
/// every other rejected request.
pub fn query_rejection_response(rejection: QueryRejection) -> Response {
    let body = ErrorResponse {
        detail: format!("Invalid query string: {}", rejection.body_text()),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
