use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    Json(state.directory.list().await).into_response()
}

pub async fn handle_one(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
) -> Response {
    match state.directory.get(&activity_name).await {
        Ok(activity) => Json(activity).into_response(),
        Err(e) => ApplicationError::from(e).into_response(),
    }
}
