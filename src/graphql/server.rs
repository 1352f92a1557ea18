use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{Router, response::Html, routing::get};
use tokio::net::TcpListener;

use crate::config::ServerSettings;
use crate::error::Result;

use super::schema::PhotoShareSchema;

pub const GREETING: &str = "Welcome to the PhotoShare API!";

/// Routes: greeting at `/`, GraphQL at `graphql_path` (GET serves the
/// explorer, POST executes), explorer at `playground_path`.
pub fn router(schema: PhotoShareSchema, settings: &ServerSettings) -> Router {
    let explorer = GraphiQLSource::build()
        .endpoint(&settings.graphql_path)
        .finish();
    let explorer_page = move || {
        let explorer = explorer.clone();
        async move { Html(explorer) }
    };

    Router::new()
        .route("/", get(|| async { GREETING }))
        .route(
            &settings.graphql_path,
            get(explorer_page.clone()).post_service(GraphQL::new(schema)),
        )
        .route(&settings.playground_path, get(explorer_page))
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn run_server(schema: PhotoShareSchema, settings: &ServerSettings) -> Result<()> {
    let listener = TcpListener::bind(settings.address()).await?;
    serve(listener, schema, settings).await
}

/// Serve on an already bound listener until Ctrl-C.
pub async fn serve(
    listener: TcpListener,
    schema: PhotoShareSchema,
    settings: &ServerSettings,
) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(
        %addr,
        graphql = %settings.graphql_path,
        playground = %settings.playground_path,
        "GraphQL server listening"
    );

    axum::serve(listener, router(schema, settings))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            tracing::warn!(error = %e, "Unable to listen for Ctrl-C, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
