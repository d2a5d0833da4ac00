//! # Prototype Framework
//!
//! Building blocks for a prototype registry: a store of pre-configured template
//! objects that hands out independent deep copies on demand, so callers can start
//! from a configured template instead of constructing complex values from scratch.
//!
//! ## Architecture Overview
//!
//! 1. **Capability** ([`Prototype`]) - "produce an independent copy of myself",
//!    implemented by each concrete type over itself.
//! 2. **Live templates** ([`PrototypeHandle`]) - the shared cell a caller keeps
//!    configuring after registration.
//! 3. **Stores** - [`PrototypeRegistry`] (in-process, one mutex) and
//!    [`RegistryActor`] + [`RegistryClient`] (one Tokio task, channel-serialized),
//!    both usable through the [`PrototypeStore`] trait.
//!
//! ## Clone-on-Read
//!
//! A lookup never returns the stored template. It clones the template as it is at
//! that moment and checks the clone against the type requested by the caller:
//!
//! ```rust
//! use prototype_framework::{Prototype, PrototypeRegistry, RegistryError};
//!
//! #[derive(Debug, PartialEq)]
//! struct Doc { title: String, tags: Vec<String> }
//! impl Prototype for Doc {
//!     fn clone_prototype(&self) -> Self {
//!         Self { title: self.title.clone(), tags: self.tags.clone() }
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Avatar;
//! impl Prototype for Avatar {
//!     fn clone_prototype(&self) -> Self { Avatar }
//! }
//!
//! let registry = PrototypeRegistry::new();
//! registry.register_value("doc", Doc { title: "T1".into(), tags: vec!["a".into()] }).unwrap();
//!
//! let mut copy: Doc = registry.get_prototype("doc").unwrap();
//! copy.tags.push("b".into());
//! let fresh: Doc = registry.get_prototype("doc").unwrap();
//! assert_eq!(fresh.tags, vec!["a"]);
//!
//! assert!(matches!(
//!     registry.get_prototype::<Avatar>("doc"),
//!     Err(RegistryError::TypeMismatch { .. })
//! ));
//! ```
//!
//! ## Concurrency Model
//!
//! - `PrototypeRegistry` guards its key map with a single `Mutex`; clones are taken
//!   under each template's own read lock.
//! - `RegistryActor` processes requests sequentially in its own task; no caller
//!   holds a lock.
//! - Cloning is pure and bounded. It never re-enters a registry.

pub mod actor;
pub mod client;
pub mod entry;
pub mod error;
pub mod message;
pub mod prototype;
pub mod registry;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::{RegistryActor, DEFAULT_BUFFER_SIZE};
pub use client::RegistryClient;
pub use entry::{ClonedPrototype, ErasedPrototype, PrototypeEntry};
pub use error::RegistryError;
pub use message::{RegistryRequest, Response};
pub use prototype::{Prototype, PrototypeHandle};
pub use registry::PrototypeRegistry;
pub use store::PrototypeStore;
