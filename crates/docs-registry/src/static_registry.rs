//! Read-only serving registry

use std::sync::Arc;

use tracing::warn;

use crate::entry::ServiceDocEntry;
use crate::error::{RegistryError, RegistryResult};
use crate::registry::DocRegistry;
use crate::snapshot::Snapshot;

/// Registry frozen at the end of startup.
///
/// Reads need no synchronization: the entries were fully populated before
/// this value existed. Writes are rejected with [`RegistryError::ReadOnly`].
#[derive(Debug, Clone)]
pub struct StaticRegistry {
    snapshot: Snapshot,
}

impl StaticRegistry {
    pub(crate) fn new(entries: Vec<ServiceDocEntry>) -> Self {
        Self {
            snapshot: Snapshot::from(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Wrap for sharing with request handlers
    pub fn into_arc(self) -> Arc<dyn DocRegistry> {
        Arc::new(self)
    }
}

impl DocRegistry for StaticRegistry {
    fn snapshot(&self) -> Snapshot {
        self.snapshot.clone()
    }

    fn register(&self, entry: ServiceDocEntry) -> RegistryResult<()> {
        warn!(display_name = %entry.display_name, "Rejected registration on read-only registry");
        Err(RegistryError::ReadOnly)
    }

    fn unregister(&self, display_name: &str) -> RegistryResult<()> {
        warn!(display_name = %display_name, "Rejected unregistration on read-only registry");
        Err(RegistryError::ReadOnly)
    }

    fn is_read_only(&self) -> bool {
        true
    }
}
