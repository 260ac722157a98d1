//! docs-registry - Service documentation registry for the API gateway
//!
//! Knows which backend services exist and where each one's API
//! description is reachable through the gateway, and hands out ordered
//! snapshots of that list for the documentation browser.
//!
//! # Lifecycle
//!
//! ```text
//!  populate(entries) ──► ServiceRegistry ──┬── freeze() ──────► StaticRegistry  (read-only)
//!        (Building)                        └── into_shared() ─► SharedRegistry  (dynamic)
//!                                                                 (Serving)
//! ```
//!
//! # Usage
//!
//! ```
//! use docs_registry::{populate, DocRegistry, ServiceDocEntry};
//!
//! let registry = populate(vec![
//!     ServiceDocEntry::new("User Service API", "/user-service/v3/api-docs"),
//!     ServiceDocEntry::new("Notification Service API", "/notification-service/v3/api-docs"),
//! ])
//! .unwrap()
//! .freeze();
//!
//! let snap = registry.snapshot();
//! assert_eq!(snap.len(), 2);
//! assert_eq!(snap[0].display_name, "User Service API");
//! ```

pub mod entry;
pub mod error;
pub mod populate;
pub mod registry;
pub mod shared;
pub mod snapshot;
pub mod static_registry;

pub use entry::ServiceDocEntry;
pub use error::{RegistryError, RegistryResult};
pub use populate::populate;
pub use registry::{DocRegistry, ServiceRegistry};
pub use shared::SharedRegistry;
pub use snapshot::Snapshot;
pub use static_registry::StaticRegistry;
