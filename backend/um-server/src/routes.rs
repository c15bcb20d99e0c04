use crate::{AppState, api, health};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // route_layer: only matched routes pass through the gate, so unknown
    // paths still 404
    let protected = Router::new()
        .route("/api/v1/users", get(api::users::users::list_users))
        .route(
            "/api/v1/users/{id}",
            get(api::users::users::get_user).put(api::users::users::update_user),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            api::middleware::require_auth,
        ));

    Router::new()
        // Auth endpoints
        .route("/api/v1/auth/register", post(api::auth::auth::register))
        .route("/api/v1/auth/signin", post(api::auth::auth::sign_in))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .merge(protected)
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
