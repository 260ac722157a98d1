//! Documentation entry for a single backend service

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};

/// Where one backend service publishes its API description, as seen
/// through the gateway.
///
/// Serialized as `{ "displayName", "docsPath", "groupHint" }`; `groupHint`
/// is emitted as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDocEntry {
    /// Label shown in the documentation browser's service selector
    #[serde(alias = "name")]
    pub display_name: String,
    /// Gateway-relative path of the service's API description
    #[serde(alias = "path")]
    pub docs_path: String,
    /// Reserved for grouping/versioning metadata
    #[serde(default, alias = "group")]
    pub group_hint: Option<String>,
}

impl ServiceDocEntry {
    /// Create an entry without a group hint
    pub fn new(display_name: impl Into<String>, docs_path: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            docs_path: docs_path.into(),
            group_hint: None,
        }
    }

    /// Set the group hint
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group_hint = Some(group.into());
        self
    }

    /// Check the input constraints for registration.
    ///
    /// The display name must be non-blank. The docs path must be a
    /// gateway-relative path: it starts with a single `/` and carries no
    /// scheme or host. Neither may carry leading or trailing whitespace,
    /// so names that only differ in padding cannot both register.
    pub fn validate(&self) -> RegistryResult<()> {
        if self.display_name.trim().is_empty() {
            return Err(RegistryError::InvalidEntry(format!(
                "display name must not be empty (docs path '{}')",
                self.docs_path
            )));
        }
        if self.display_name.trim() != self.display_name {
            return Err(RegistryError::InvalidEntry(format!(
                "display name '{}' must not have leading or trailing whitespace",
                self.display_name
            )));
        }

        let path = self.docs_path.as_str();
        if path.trim().is_empty() {
            return Err(RegistryError::InvalidEntry(format!(
                "docs path must not be empty for '{}'",
                self.display_name
            )));
        }
        if path.trim() != path {
            return Err(RegistryError::InvalidEntry(format!(
                "docs path '{}' for '{}' must not have leading or trailing whitespace",
                path, self.display_name
            )));
        }
        if path.contains("://") || path.starts_with("//") {
            return Err(RegistryError::InvalidEntry(format!(
                "docs path '{}' for '{}' must be gateway-relative, not an absolute URL",
                path, self.display_name
            )));
        }
        if !path.starts_with('/') {
            return Err(RegistryError::InvalidEntry(format!(
                "docs path '{}' for '{}' must start with '/'",
                path, self.display_name
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_entry() {
        let entry = ServiceDocEntry::new("User Service API", "/user-service/v3/api-docs");
        assert!(entry.validate().is_ok());
        assert_eq!(entry.group_hint, None);
    }

    #[test]
    fn test_blank_name_rejected() {
        let entry = ServiceDocEntry::new("   ", "/user-service/v3/api-docs");
        assert!(matches!(
            entry.validate(),
            Err(RegistryError::InvalidEntry(_))
        ));
    }

    #[test]
    fn test_empty_path_rejected() {
        let entry = ServiceDocEntry::new("User Service API", "");
        assert!(matches!(
            entry.validate(),
            Err(RegistryError::InvalidEntry(_))
        ));
    }

    #[test]
    fn test_absolute_url_rejected() {
        for path in [
            "http://user-service:8080/v3/api-docs",
            "https://example.com/v3/api-docs",
            "//user-service/v3/api-docs",
        ] {
            let entry = ServiceDocEntry::new("User Service API", path);
            assert!(
                matches!(entry.validate(), Err(RegistryError::InvalidEntry(_))),
                "{} should be rejected",
                path
            );
        }
    }

    #[test]
    fn test_missing_leading_slash_rejected() {
        let entry = ServiceDocEntry::new("User Service API", "user-service/v3/api-docs");
        let err = entry.validate().unwrap_err();
        assert!(err.to_string().contains("user-service/v3/api-docs"));
    }

    #[test]
    fn test_padded_name_rejected() {
        for name in ["User Service API ", " User Service API", "User Service API\t"] {
            let entry = ServiceDocEntry::new(name, "/user-service/v3/api-docs");
            assert!(
                matches!(entry.validate(), Err(RegistryError::InvalidEntry(_))),
                "{:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_padded_path_rejected() {
        for path in [" /user-service/v3/api-docs", "/user-service/v3/api-docs "] {
            let entry = ServiceDocEntry::new("User Service API", path);
            assert!(
                matches!(entry.validate(), Err(RegistryError::InvalidEntry(_))),
                "{:?} should be rejected",
                path
            );
        }
    }

    #[test]
    fn test_serialized_shape() {
        let entry = ServiceDocEntry::new("User Service API", "/user-service/v3/api-docs");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "displayName": "User Service API",
                "docsPath": "/user-service/v3/api-docs",
                "groupHint": null
            })
        );
    }

    #[test]
    fn test_deserialize_short_field_names() {
        let entry: ServiceDocEntry = serde_json::from_str(
            r#"{"name": "Notification Service API", "path": "/notification-service/v3/api-docs", "group": "v1"}"#,
        )
        .unwrap();
        assert_eq!(entry.display_name, "Notification Service API");
        assert_eq!(entry.docs_path, "/notification-service/v3/api-docs");
        assert_eq!(entry.group_hint.as_deref(), Some("v1"));
    }
}
