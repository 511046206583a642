use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use projects::modules::projects::adapters::outbound::project_store_in_memory::InMemoryProjectStore;
use projects::shared::core::primitives::SystemClock;
use projects::shared::infrastructure::cache_store::in_memory::InMemoryCacheStore;
use projects::shell::config::AppConfig;
use projects::shell::graphql::{AppSchema, build_schema};
use projects::shell::http::router;
use projects::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory backends for now
    let clock = Arc::new(SystemClock);
    let store = Arc::new(InMemoryProjectStore::new());
    let cache = Arc::new(InMemoryCacheStore::new(clock.clone()));
    let state = AppState::new(store, cache, clock, config.cache.clone());

    let schema = build_schema(state.clone());

    let app = router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!(
        summary_ttl = ?config.cache.entry_ttl,
        stale_fallback = ?config.cache.stale_fallback,
        "GraphQL endpoint: http://{}/gql",
        config.http_addr
    );
    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
