use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use activities::modules::activities::adapters::outbound::activity_directory_in_memory::InMemoryActivityDirectory;
use activities::shell::config::AppConfig;
use activities::shell::http::router;
use activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let catalog = config.load_catalog()?;
    tracing::info!(
        activities = catalog.len(),
        seed_file = ?config.seed_file,
        "activity catalog loaded"
    );

    let directory = Arc::new(InMemoryActivityDirectory::new(catalog));
    let state = AppState::in_memory(directory);
    let app = router(state, &config.static_dir);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Activities API: http://{}/activities", listener.local_addr()?);
    tracing::info!("GraphQL endpoint: http://{}/graphql", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
