// Server module - Builds the HTTP application and runs it

use axum::Router;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::infrastructure::AppState;

/// Build the wiki router with request tracing
pub fn build_router(state: AppState) -> Router {
    api::wiki_router(state).layer(TraceLayer::new_for_http())
}

/// Bind `0.0.0.0:port` and serve until the process exits
pub async fn serve(state: AppState, port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Wiki server listening on {}", addr);

    axum::serve(listener, app).await
}
