//! Startup population of the registry

use tracing::{error, info};

use crate::entry::ServiceDocEntry;
use crate::error::RegistryResult;
use crate::registry::ServiceRegistry;

/// Build a registry from an ordered source of entries.
///
/// Entries are registered in iteration order. The first invalid or
/// duplicate entry aborts population and its error is returned; no
/// partially built registry escapes.
pub fn populate<I>(entries: I) -> RegistryResult<ServiceRegistry>
where
    I: IntoIterator<Item = ServiceDocEntry>,
{
    let mut registry = ServiceRegistry::new();

    for entry in entries {
        let name = entry.display_name.clone();
        let path = entry.docs_path.clone();
        if let Err(e) = registry.register(entry) {
            error!(display_name = %name, docs_path = %path, error = %e, "Failed to populate service registry");
            return Err(e);
        }
    }

    info!(count = registry.len(), "Service registry populated");
    Ok(registry)
}
