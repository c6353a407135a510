mod docs;
mod features;
mod middleware;

use tracing::info;
use utoipa::OpenApi;

use features::repositories::repo::RepositoryStore;

#[derive(Clone)]
pub struct AppState {
    pub repositories: RepositoryStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter("info").init();

    let repositories = RepositoryStore::new();
    let state = AppState { repositories };

    let app = features::router(state.clone()).merge(docs::router(docs::ApiDoc::openapi()));
    let bind = std::env::var("SERVER_BIND").unwrap_or_else(|_| "127.0.0.1:3333".into());
    info!(%bind, "server listening");
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
