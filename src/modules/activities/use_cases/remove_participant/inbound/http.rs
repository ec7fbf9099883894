use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::activities::adapters::inbound::http_responses::{
    MessageResponse, query_rejection_response,
};
use crate::modules::activities::use_cases::remove_participant::command::RemoveParticipant;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RemoveParticipantParams {
    pub email: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<RemoveParticipantParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return query_rejection_response(rejection),
    };

    let command = RemoveParticipant {
        activity_name,
        email: params.email.unwrap_or_default(),
    };

    match state.remove_handler.handle(command).await {
        Ok(removed) => Json(MessageResponse {
            message: removed.message(),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
