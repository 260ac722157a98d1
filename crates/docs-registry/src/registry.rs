//! Service registry - the authoritative name -> docs path mapping
//!
//! A `ServiceRegistry` is the building-phase form: it is owned by the
//! startup sequence and mutated through `&mut self`. Once populated it is
//! turned into one of the serving forms:
//!
//! - [`StaticRegistry`] via [`ServiceRegistry::freeze`]: read-only, lock-free
//! - [`SharedRegistry`] via [`ServiceRegistry::into_shared`]: accepts
//!   registration changes while serving
//!
//! Both serving forms implement [`DocRegistry`], which is what the HTTP
//! layer holds.

use tracing::{debug, info};

use crate::entry::ServiceDocEntry;
use crate::error::{RegistryError, RegistryResult};
use crate::shared::SharedRegistry;
use crate::snapshot::Snapshot;
use crate::static_registry::StaticRegistry;

/// Serving-phase registry interface
pub trait DocRegistry: Send + Sync {
    /// Current entries in registration order. Never fails.
    fn snapshot(&self) -> Snapshot;

    /// Add an entry
    fn register(&self, entry: ServiceDocEntry) -> RegistryResult<()>;

    /// Remove the entry with this display name
    fn unregister(&self, display_name: &str) -> RegistryResult<()>;

    /// Whether `register`/`unregister` are rejected with `ReadOnly`
    fn is_read_only(&self) -> bool;
}

/// Ordered set of service documentation entries.
///
/// Display names and docs paths are each pairwise distinct. Entries keep
/// the order in which they were registered.
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    entries: Vec<ServiceDocEntry>,
}

impl ServiceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry.
    ///
    /// Fails without modifying the registry if the entry is invalid or its
    /// name or path is already taken. The name is checked before the path.
    pub fn register(&mut self, entry: ServiceDocEntry) -> RegistryResult<()> {
        entry.validate()?;

        if self.contains_name(&entry.display_name) {
            return Err(RegistryError::DuplicateName(entry.display_name));
        }
        if self.contains_path(&entry.docs_path) {
            return Err(RegistryError::DuplicatePath(entry.docs_path));
        }

        info!(
            display_name = %entry.display_name,
            docs_path = %entry.docs_path,
            "Registering service docs"
        );
        self.entries.push(entry);
        Ok(())
    }

    /// Remove the entry with this display name, keeping the order of the rest
    pub fn unregister(&mut self, display_name: &str) -> RegistryResult<ServiceDocEntry> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.display_name == display_name)
            .ok_or_else(|| RegistryError::NotFound(display_name.to_string()))?;

        let removed = self.entries.remove(idx);
        info!(
            display_name = %removed.display_name,
            docs_path = %removed.docs_path,
            "Unregistered service docs"
        );
        Ok(removed)
    }

    /// Copy the current entries
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self.entries.clone())
    }

    /// Get an entry by display name
    pub fn get(&self, display_name: &str) -> Option<&ServiceDocEntry> {
        self.entries.iter().find(|e| e.display_name == display_name)
    }

    pub fn contains_name(&self, display_name: &str) -> bool {
        self.entries.iter().any(|e| e.display_name == display_name)
    }

    pub fn contains_path(&self, docs_path: &str) -> bool {
        self.entries.iter().any(|e| e.docs_path == docs_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish building: the result rejects all further writes
    pub fn freeze(self) -> StaticRegistry {
        debug!(count = self.entries.len(), "Freezing service registry");
        StaticRegistry::new(self.entries)
    }

    /// Finish building: the result stays writable while serving
    pub fn into_shared(self) -> SharedRegistry {
        debug!(count = self.entries.len(), "Sharing service registry");
        SharedRegistry::new(self)
    }
}
