//! Aggregated documentation index handlers

use axum::extract::{Path, State};
use axum::Json;
use docs_registry::{ServiceDocEntry, Snapshot};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Response for listing registered services
#[derive(Serialize)]
pub struct ServicesListResponse {
    pub count: usize,
    pub services: Snapshot,
}

/// GET /docs/services
/// List all registered services in registration order
pub async fn list_services(State(state): State<AppState>) -> Json<ServicesListResponse> {
    let services = state.registry().snapshot();

    Json(ServicesListResponse {
        count: services.len(),
        services,
    })
}

/// GET /docs/services/{name}
/// Get a single service entry by display name
pub async fn get_service(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ServiceDocEntry>, ApiError> {
    state
        .registry()
        .snapshot()
        .find(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Service not found: {}", name)))
}
