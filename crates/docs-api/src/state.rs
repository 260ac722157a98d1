//! Application state for the docs API

use std::sync::Arc;

use docs_registry::DocRegistry;

use crate::info::GatewayApiInfo;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service documentation registry (static or dynamic)
    registry: Arc<dyn DocRegistry>,
    /// Metadata for the gateway's own API description
    api_info: Arc<GatewayApiInfo>,
    /// Service preselected in the documentation browser
    primary: Option<String>,
}

impl AppState {
    /// Create a new AppState with default API info
    pub fn new(registry: Arc<dyn DocRegistry>) -> Self {
        Self::with_api_info(registry, GatewayApiInfo::default())
    }

    /// Create a new AppState with the given API info
    pub fn with_api_info(registry: Arc<dyn DocRegistry>, api_info: GatewayApiInfo) -> Self {
        Self {
            registry,
            api_info: Arc::new(api_info),
            primary: None,
        }
    }

    /// Set the service the browser should select first
    pub fn with_primary(mut self, primary: Option<String>) -> Self {
        self.primary = primary;
        self
    }

    pub fn registry(&self) -> &dyn DocRegistry {
        self.registry.as_ref()
    }

    pub fn api_info(&self) -> &GatewayApiInfo {
        &self.api_info
    }

    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }
}
