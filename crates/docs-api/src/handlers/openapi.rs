//! The gateway's own API description

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::info::GatewayApiInfo;
use crate::state::AppState;

const OPENAPI_VERSION: &str = "3.0.1";

/// Minimal OpenAPI document describing the gateway itself.
///
/// Backend operations are not merged in here; the browser loads each
/// backend's description separately.
#[derive(Debug, Serialize)]
pub struct OpenApiDocument {
    pub openapi: String,
    pub info: GatewayApiInfo,
    pub paths: Map<String, Value>,
}

impl OpenApiDocument {
    pub fn new(info: GatewayApiInfo) -> Self {
        Self {
            openapi: OPENAPI_VERSION.to_string(),
            info,
            paths: Map::new(),
        }
    }
}

/// GET /v3/api-docs
pub async fn get_gateway_api_docs(State(state): State<AppState>) -> Json<OpenApiDocument> {
    Json(OpenApiDocument::new(state.api_info().clone()))
}
