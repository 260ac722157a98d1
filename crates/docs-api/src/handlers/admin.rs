//! Service registration handlers
//!
//! Only effective when the registry runs in dynamic mode; a registry frozen
//! at startup answers 403.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use docs_registry::ServiceDocEntry;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Response for delete operation
#[derive(Serialize)]
pub struct DeleteResponse {
    pub status: String,
    pub deleted: String,
}

/// POST /admin/docs/services
/// Register a service from a YAML or JSON body
pub async fn register_service(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<ServiceDocEntry>), ApiError> {
    // YAML parser accepts JSON too
    let entry: ServiceDocEntry = serde_yaml::from_str(&body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid YAML/JSON: {}", e)))?;

    state.registry().register(entry.clone())?;

    tracing::info!(
        display_name = %entry.display_name,
        docs_path = %entry.docs_path,
        "Service docs registered via admin API"
    );

    Ok((StatusCode::CREATED, Json(entry)))
}

/// DELETE /admin/docs/services/{name}
/// Unregister a service
pub async fn unregister_service(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.registry().unregister(&name)?;

    tracing::info!(display_name = %name, "Service docs unregistered via admin API");

    Ok(Json(DeleteResponse {
        status: "ok".to_string(),
        deleted: name,
    }))
}
