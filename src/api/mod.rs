//! Web API module for daytab

pub mod handlers;
pub mod state;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::store::SharedStore;
use state::ApiState;

/// Create the API router
pub fn create_api_router(state: ApiState) -> Router {
    Router::new()
        // Liveness probe
        .route("/", get(handlers::health::root))
        // Tasks API
        .route(
            "/tasks",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
        )
        .route(
            "/tasks/{id}",
            put(handlers::tasks::update_task).delete(handlers::tasks::delete_task),
        )
        .with_state(state)
}

/// Create the full router. CORS is wide open: the frontend may be served
/// from any origin and the API carries no credentials.
pub fn create_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_api_router(state).layer(cors)
}

/// Start the API server
pub async fn start_server(port: u16, store: SharedStore) -> std::io::Result<()> {
    let app = create_router(ApiState::new(store));
    let addr = format!("0.0.0.0:{}", port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on port {}", port);

    axum::serve(listener, app)
        .await
        .map_err(std::io::Error::other)
}
