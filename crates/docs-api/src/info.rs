//! Metadata for the gateway's own API description

use serde::{Deserialize, Serialize};

/// `info` block of the gateway's OpenAPI document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayApiInfo {
    pub title: String,
    pub description: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

impl Default for GatewayApiInfo {
    fn default() -> Self {
        Self {
            title: "API Gateway".to_string(),
            description: "API Gateway for the microservices platform. \
                          This gateway aggregates the API documentation of all backend services."
                .to_string(),
            version: "1.0".to_string(),
            contact: None,
            license: Some(License {
                name: "MIT License".to_string(),
                url: Some("https://opensource.org/licenses/MIT".to_string()),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
