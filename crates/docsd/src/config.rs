//! TOML configuration for the docs daemon
//!
//! ```toml
//! [server]
//! port = 8080
//!
//! [registry]
//! dynamic = false
//! primary = "User Service API"
//!
//! [api_info]
//! title = "API Gateway"
//!
//! [[service]]
//! name = "User Service API"
//! path = "/user-service/v3/api-docs"
//! ```

use std::path::Path;

use anyhow::Context;
use docs_api::GatewayApiInfo;
use docs_registry::ServiceDocEntry;
use serde::Deserialize;

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Registry behavior
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    /// Keep the registry writable after startup (admin registration API)
    pub dynamic: bool,
    /// Service the documentation browser selects first
    pub primary: Option<String>,
}

/// Top-level daemon configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    pub server: ServerConfig,
    pub registry: RegistrySettings,
    pub api_info: GatewayApiInfo,
    /// `[[service]]` tables in file order (`name`, `path`, optional `group`)
    #[serde(rename = "service")]
    pub services: Vec<ServiceDocEntry>,
}

impl DaemonConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Built-in configuration used when no config file is given
    pub fn builtin() -> Self {
        Self {
            services: vec![
                ServiceDocEntry::new("User Service API", "/user-service/v3/api-docs"),
                ServiceDocEntry::new(
                    "Notification Service API",
                    "/notification-service/v3/api-docs",
                ),
            ],
            ..Self::default()
        }
    }

    /// Registry entries in configuration order
    pub fn entries(&self) -> Vec<ServiceDocEntry> {
        self.services.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DaemonConfig::from_toml("").unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.registry.dynamic);
        assert!(config.registry.primary.is_none());
        assert_eq!(config.api_info, GatewayApiInfo::default());
        assert!(config.entries().is_empty());
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
[server]
port = 9090

[registry]
dynamic = true
primary = "Notification Service API"

[api_info]
title = "Platform Gateway"
version = "2.1"

[api_info.contact]
name = "Platform Team"
email = "platform@example.com"

[api_info.license]
name = "MIT License"
url = "https://opensource.org/licenses/MIT"

[[service]]
name = "User Service API"
path = "/user-service/v3/api-docs"

[[service]]
name = "Notification Service API"
path = "/notification-service/v3/api-docs"
group = "messaging"
"#;
        let config = DaemonConfig::from_toml(toml).unwrap();
        assert_eq!(config.server.port, 9090);
        assert!(config.registry.dynamic);
        assert_eq!(
            config.registry.primary.as_deref(),
            Some("Notification Service API")
        );
        assert_eq!(config.api_info.title, "Platform Gateway");
        assert_eq!(config.api_info.version, "2.1");
        // Unset fields keep their defaults
        assert_eq!(
            config.api_info.description,
            GatewayApiInfo::default().description
        );
        assert_eq!(
            config.api_info.contact.as_ref().and_then(|c| c.email.as_deref()),
            Some("platform@example.com")
        );

        let entries = config.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].display_name, "User Service API");
        assert_eq!(entries[0].group_hint, None);
        assert_eq!(entries[1].docs_path, "/notification-service/v3/api-docs");
        assert_eq!(entries[1].group_hint.as_deref(), Some("messaging"));
    }

    #[test]
    fn test_service_accepts_entry_field_names() {
        let toml = r#"
[[service]]
displayName = "Search Service API"
docsPath = "/search-service/v3/api-docs"
groupHint = "v2"
"#;
        let config = DaemonConfig::from_toml(toml).unwrap();
        assert_eq!(
            config.entries(),
            vec![ServiceDocEntry::new("Search Service API", "/search-service/v3/api-docs")
                .with_group("v2")]
        );
    }

    #[test]
    fn test_service_missing_path_is_error() {
        let toml = r#"
[[service]]
name = "User Service API"
"#;
        assert!(DaemonConfig::from_toml(toml).is_err());
    }

    #[test]
    fn test_builtin_services() {
        let entries = DaemonConfig::builtin().entries();
        assert_eq!(
            entries,
            vec![
                ServiceDocEntry::new("User Service API", "/user-service/v3/api-docs"),
                ServiceDocEntry::new(
                    "Notification Service API",
                    "/notification-service/v3/api-docs"
                ),
            ]
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[service]]
name = "Billing Service API"
path = "/billing-service/v3/api-docs"
"#
        )
        .unwrap();

        let config = DaemonConfig::load(file.path()).unwrap();
        assert_eq!(config.entries()[0].display_name, "Billing Service API");
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = DaemonConfig::load("/nonexistent/docsd.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/docsd.toml"));
    }
}
