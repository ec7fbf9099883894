use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::activities::adapters::inbound::http_responses::{
    MessageResponse, query_rejection_response,
};
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignUpParams {
    pub email: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<SignUpParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return query_rejection_response(rejection),
    };

    let command = SignUpForActivity {
        activity_name,
        email: params.email.unwrap_or_default(),
    };

    match state.sign_up_handler.handle(command).await {
        Ok(signed_up) => Json(MessageResponse {
            message: signed_up.message(),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
