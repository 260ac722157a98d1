//! Writable serving registry for dynamic registration

use std::sync::Arc;

use parking_lot::RwLock;

use crate::entry::ServiceDocEntry;
use crate::error::RegistryResult;
use crate::registry::{DocRegistry, ServiceRegistry};
use crate::snapshot::Snapshot;

/// Registry that keeps accepting `register`/`unregister` while serving.
///
/// Writers take the write lock; `snapshot()` copies the entry list under
/// the read lock, so a reader never observes a half-applied change.
#[derive(Debug)]
pub struct SharedRegistry {
    inner: RwLock<ServiceRegistry>,
}

impl SharedRegistry {
    pub fn new(registry: ServiceRegistry) -> Self {
        Self {
            inner: RwLock::new(registry),
        }
    }

    /// Get a copy of an entry by display name
    pub fn get(&self, display_name: &str) -> Option<ServiceDocEntry> {
        self.inner.read().get(display_name).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Wrap for sharing with request handlers
    pub fn into_arc(self) -> Arc<dyn DocRegistry> {
        Arc::new(self)
    }
}

impl DocRegistry for SharedRegistry {
    fn snapshot(&self) -> Snapshot {
        self.inner.read().snapshot()
    }

    fn register(&self, entry: ServiceDocEntry) -> RegistryResult<()> {
        self.inner.write().register(entry)
    }

    fn unregister(&self, display_name: &str) -> RegistryResult<()> {
        self.inner.write().unregister(display_name).map(|_| ())
    }

    fn is_read_only(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use super::*;
    use crate::error::RegistryError;

    #[test]
    fn test_register_and_unregister_while_serving() {
        let registry = ServiceRegistry::new().into_shared();
        registry
            .register(ServiceDocEntry::new("User Service API", "/user-service/v3/api-docs"))
            .unwrap();
        registry
            .register(ServiceDocEntry::new(
                "Notification Service API",
                "/notification-service/v3/api-docs",
            ))
            .unwrap();
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_read_only());

        registry.unregister("User Service API").unwrap();
        let snap = registry.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].display_name, "Notification Service API");

        assert_eq!(
            registry.unregister("User Service API"),
            Err(RegistryError::NotFound("User Service API".into()))
        );
    }

    #[test]
    fn test_handed_out_snapshot_is_stable() {
        let registry = ServiceRegistry::new().into_shared();
        registry.register(ServiceDocEntry::new("A", "/a")).unwrap();
        let before = registry.snapshot();

        registry.unregister("A").unwrap();
        registry.register(ServiceDocEntry::new("B", "/b")).unwrap();

        assert_eq!(before.to_vec(), vec![ServiceDocEntry::new("A", "/a")]);
        assert_eq!(registry.get("B").map(|e| e.docs_path), Some("/b".to_string()));
    }

    #[test]
    fn test_concurrent_register_and_snapshot() {
        let registry = Arc::new(ServiceRegistry::new().into_shared());

        let writers: Vec<_> = (0..4)
            .map(|w| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for i in 0..50 {
                        // Every writer competes for the same names; exactly one wins each.
                        let _ = registry.register(ServiceDocEntry::new(
                            format!("svc-{}", i),
                            format!("/svc-{}/{}/v3/api-docs", i, w),
                        ));
                    }
                })
            })
            .collect();

        let reader = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..200 {
                    let snap = registry.snapshot();
                    let names: HashSet<&str> =
                        snap.iter().map(|e| e.display_name.as_str()).collect();
                    let paths: HashSet<&str> = snap.iter().map(|e| e.docs_path.as_str()).collect();
                    assert_eq!(names.len(), snap.len());
                    assert_eq!(paths.len(), snap.len());
                }
            })
        };

        for w in writers {
            w.join().unwrap();
        }
        reader.join().unwrap();

        assert_eq!(registry.len(), 50);
    }
}
