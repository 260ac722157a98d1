//! Documentation browser configuration
//!
//! Swagger UI loads this document once per page and builds its service
//! selector from `urls`, then fetches each `url` through the gateway.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Path the browser is pointed at to load its configuration
pub const SWAGGER_CONFIG_PATH: &str = "/v3/api-docs/swagger-config";

/// One selectable API in the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwaggerUrl {
    pub name: String,
    pub url: String,
}

/// Swagger UI configuration document
#[derive(Debug, Serialize, Deserialize)]
pub struct SwaggerUiConfig {
    #[serde(rename = "configUrl")]
    pub config_url: String,
    pub urls: Vec<SwaggerUrl>,
    #[serde(
        rename = "urls.primaryName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_name: Option<String>,
}

/// GET /v3/api-docs/swagger-config
pub async fn get_swagger_config(State(state): State<AppState>) -> Json<SwaggerUiConfig> {
    let snapshot = state.registry().snapshot();

    let urls: Vec<SwaggerUrl> = snapshot
        .iter()
        .map(|entry| SwaggerUrl {
            name: entry.display_name.clone(),
            url: entry.docs_path.clone(),
        })
        .collect();

    // Only advertise a primary the browser can actually select.
    let primary_name = state
        .primary()
        .filter(|name| snapshot.find(name).is_some())
        .map(str::to_string);

    tracing::debug!(count = urls.len(), "Serving swagger-config");

    Json(SwaggerUiConfig {
        config_url: SWAGGER_CONFIG_PATH.to_string(),
        urls,
        primary_name,
    })
}
