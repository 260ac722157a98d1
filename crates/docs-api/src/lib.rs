//! docs-api - HTTP surface of the gateway's aggregated API documentation
//!
//! Serves the documentation browser's configuration (one entry per backend
//! service, taken from a registry snapshot), the gateway's own API
//! description, and admin endpoints for dynamic registration.
//!
//! # Usage
//!
//! ```ignore
//! use docs_api::{create_router, AppState};
//! use docs_registry::populate;
//!
//! let registry = populate(entries)?.freeze().into_arc();
//! let router = create_router(AppState::new(registry));
//! ```

pub mod error;
pub mod handlers;
pub mod info;
pub mod state;

pub use error::ApiError;
pub use handlers::swagger_config::{SwaggerUiConfig, SwaggerUrl, SWAGGER_CONFIG_PATH};
pub use info::{Contact, GatewayApiInfo, License};
pub use state::AppState;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the docs API router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Documentation browser configuration
        .route(
            SWAGGER_CONFIG_PATH,
            get(handlers::swagger_config::get_swagger_config),
        )
        // Gateway's own API description
        .route(
            "/v3/api-docs",
            get(handlers::openapi::get_gateway_api_docs),
        )
        // Aggregated index
        .route("/docs/services", get(handlers::services::list_services))
        .route(
            "/docs/services/{name}",
            get(handlers::services::get_service),
        )
        // Admin routes - dynamic registration
        .route(
            "/admin/docs/services",
            post(handlers::admin::register_service),
        )
        .route(
            "/admin/docs/services/{name}",
            delete(handlers::admin::unregister_service),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
