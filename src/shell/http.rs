use std::path::Path;

use axum::{
    Extension, Router,
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::remove_participant::inbound::http as remove_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub const LANDING_PAGE: &str = "/static/index.html";

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let schema = graphql::build_schema(state.clone());

    Router::new()
        .route("/", get(redirect_to_landing_page))
        .route("/activities", get(list_http::handle))
        .route("/activities/{name}", get(list_http::handle_one))
        .route("/activities/{name}/signup", post(sign_up_http::handle))
        .route("/activities/{name}/remove", delete(remove_http::handle))
        .route("/graphql", get(graphql::graphiql).post(graphql::graphql))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn redirect_to_landing_page() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}
