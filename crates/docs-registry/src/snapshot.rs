//! Immutable point-in-time view of the registry

use std::ops::Deref;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::entry::ServiceDocEntry;

/// Ordered, immutable copy of the registered entries.
///
/// Cloning is a reference-count increment. Later changes to the registry
/// never show up in a snapshot that has already been taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Arc<[ServiceDocEntry]>);

impl Snapshot {
    /// An empty snapshot
    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// Find an entry by display name
    pub fn find(&self, display_name: &str) -> Option<&ServiceDocEntry> {
        self.0.iter().find(|e| e.display_name == display_name)
    }

    /// Copy into an owned vector
    pub fn to_vec(&self) -> Vec<ServiceDocEntry> {
        self.0.to_vec()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for Snapshot {
    type Target = [ServiceDocEntry];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<ServiceDocEntry>> for Snapshot {
    fn from(entries: Vec<ServiceDocEntry>) -> Self {
        Self(Arc::from(entries))
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a ServiceDocEntry;
    type IntoIter = std::slice::Iter<'a, ServiceDocEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_ref().serialize(serializer)
    }
}
