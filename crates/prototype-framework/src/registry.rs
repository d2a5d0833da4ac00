//! # Prototype Registry
//!
//! [`PrototypeRegistry`] maps string keys to live templates and hands out a fresh
//! clone on every lookup (clone-on-read). It never returns the stored template itself.
//!
//! ## Locking
//!
//! The key map sits behind a single `Mutex` covering both registration and lookup.
//! A lookup takes the entry's `Arc` under that lock, then clones it under the
//! template's own read lock. A concurrent [`register`](PrototypeRegistry::register)
//! only swaps the map slot and never writes into the entry being cloned, so every
//! clone observes one consistent state of one template.

use crate::entry::{entry_of, ClonedPrototype, PrototypeEntry};
use crate::error::RegistryError;
use crate::prototype::{Prototype, PrototypeHandle};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// A keyed store of live prototype templates.
///
/// All methods take `&self`, so a registry can be shared between threads behind an `Arc`.
///
/// # Example
///
/// ```rust
/// use prototype_framework::{Prototype, PrototypeRegistry, RegistryError};
///
/// #[derive(Debug, PartialEq)]
/// struct Doc { title: String, tags: Vec<String> }
///
/// impl Prototype for Doc {
///     fn clone_prototype(&self) -> Self {
///         Self { title: self.title.clone(), tags: self.tags.clone() }
///     }
/// }
///
/// let registry = PrototypeRegistry::new();
/// let template = registry
///     .register_value("doc", Doc { title: "T1".into(), tags: vec!["a".into()] })
///     .unwrap();
///
/// // Later changes to the template are visible to later lookups.
/// template.update(|doc| doc.tags.push("b".into()));
/// let copy: Doc = registry.get_prototype("doc").unwrap();
/// assert_eq!(copy.tags, vec!["a", "b"]);
///
/// assert!(matches!(
///     registry.get_prototype::<Doc>("missing"),
///     Err(RegistryError::NotFound(_))
/// ));
/// ```
#[derive(Default)]
pub struct PrototypeRegistry {
    entries: Mutex<HashMap<String, PrototypeEntry>>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, PrototypeEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `prototype` under `key`, replacing any previous entry.
    ///
    /// The registry keeps a reference to the live template; nothing is cloned here.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyKey`] if `key` is empty.
    pub fn register<T: Prototype>(
        &self,
        key: impl Into<String>,
        prototype: &PrototypeHandle<T>,
    ) -> Result<(), RegistryError> {
        self.insert_entry(key.into(), entry_of(prototype))
    }

    /// Wraps `value` in a new handle, registers it and returns the handle.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyKey`] if `key` is empty.
    pub fn register_value<T: Prototype>(
        &self,
        key: impl Into<String>,
        value: T,
    ) -> Result<PrototypeHandle<T>, RegistryError> {
        let handle = PrototypeHandle::new(value);
        self.register(key, &handle)?;
        Ok(handle)
    }

    /// Stores an already type-erased entry.
    pub fn insert_entry(&self, key: String, entry: PrototypeEntry) -> Result<(), RegistryError> {
        if key.is_empty() {
            warn!("Rejected empty prototype key");
            return Err(RegistryError::EmptyKey);
        }
        let type_name = entry.prototype_type_name();
        let mut entries = self.lock();
        let replaced = entries.insert(key.clone(), entry).is_some();
        info!(%key, type_name, replaced, size = entries.len(), "Registered");
        Ok(())
    }

    /// Returns a fresh clone of the template registered under `key`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if nothing is registered under `key`.
    /// - [`RegistryError::TypeMismatch`] if the template is not a `T`.
    pub fn get_prototype<T: Prototype>(&self, key: &str) -> Result<T, RegistryError> {
        self.clone_entry(key)?.downcast::<T>().inspect_err(|e| {
            warn!(key, error = %e, "Type mismatch");
        })
    }

    /// Clones the template registered under `key` without checking its type.
    pub fn clone_entry(&self, key: &str) -> Result<ClonedPrototype, RegistryError> {
        let entry = self.lock().get(key).cloned();
        let Some(entry) = entry else {
            warn!(key, "Not found");
            return Err(RegistryError::NotFound(key.to_string()));
        };
        let cloned = ClonedPrototype::capture(key, entry.as_ref());
        debug!(key, type_name = cloned.type_name(), "Cloned");
        Ok(cloned)
    }

    /// Removes the entry under `key`. Returns `true` if one was present.
    ///
    /// Handles held by callers stay valid; only the registry's reference is dropped.
    pub fn unregister(&self, key: &str) -> bool {
        let mut entries = self.lock();
        let removed = entries.remove(key).is_some();
        if removed {
            info!(key, size = entries.len(), "Unregistered");
        }
        removed
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.lock().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Short type name of the template stored under `key`.
    pub fn type_name_of(&self, key: &str) -> Option<&'static str> {
        self.lock().get(key).map(|entry| entry.prototype_type_name())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl fmt::Debug for PrototypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrototypeRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug, PartialEq)]
    struct Memo {
        title: String,
        tags: Vec<String>,
    }

    impl Memo {
        fn new(title: &str, tags: &[&str]) -> Self {
            Self {
                title: title.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
            }
        }
    }

    impl Prototype for Memo {
        fn clone_prototype(&self) -> Self {
            Self {
                title: self.title.clone(),
                tags: self.tags.clone(),
            }
        }
    }

    #[derive(Debug, PartialEq)]
    struct Badge {
        level: u8,
    }

    impl Prototype for Badge {
        fn clone_prototype(&self) -> Self {
            Self { level: self.level }
        }
    }

    #[test]
    fn clone_on_read_returns_independent_values() {
        let registry = PrototypeRegistry::new();
        registry
            .register_value("memo", Memo::new("T1", &["a"]))
            .unwrap();

        let mut first: Memo = registry.get_prototype("memo").unwrap();
        let second: Memo = registry.get_prototype("memo").unwrap();
        assert_eq!(first, second);
        assert_ne!(first.tags.as_ptr(), second.tags.as_ptr());

        first.tags.push("b".into());
        let third: Memo = registry.get_prototype("memo").unwrap();
        assert_eq!(third.tags, vec!["a"]);
    }

    #[test]
    fn lookups_follow_the_live_template() {
        let registry = PrototypeRegistry::new();
        let handle = PrototypeHandle::new(Memo::new("T1", &["a"]));
        registry.register("memo", &handle).unwrap();

        let before: Memo = registry.get_prototype("memo").unwrap();
        handle.update(|memo| memo.tags.push("b".into()));
        let after: Memo = registry.get_prototype("memo").unwrap();

        assert_eq!(before.tags, vec!["a"]);
        assert_eq!(after.tags, vec!["a", "b"]);
    }

    #[test]
    fn missing_key_is_not_found() {
        let registry = PrototypeRegistry::new();
        assert_eq!(
            registry.get_prototype::<Memo>("nope"),
            Err(RegistryError::NotFound("nope".into()))
        );
    }

    #[test]
    fn wrong_type_is_a_mismatch() {
        let registry = PrototypeRegistry::new();
        registry.register_value("badge", Badge { level: 3 }).unwrap();

        let err = registry.get_prototype::<Memo>("badge").unwrap_err();
        assert_eq!(
            err,
            RegistryError::TypeMismatch {
                key: "badge".into(),
                requested: "Memo",
                actual: "Badge",
            }
        );
        assert_eq!(registry.get_prototype::<Badge>("badge").unwrap().level, 3);
    }

    #[test]
    fn empty_key_is_rejected() {
        let registry = PrototypeRegistry::new();
        assert_eq!(
            registry.register_value("", Badge { level: 1 }).unwrap_err(),
            RegistryError::EmptyKey
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn reregistering_overwrites() {
        let registry = PrototypeRegistry::new();
        registry.register_value("slot", Badge { level: 1 }).unwrap();
        registry
            .register_value("slot", Memo::new("replacement", &[]))
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.type_name_of("slot"), Some("Memo"));
        assert!(registry.get_prototype::<Badge>("slot").is_err());
    }

    #[test]
    fn unregister_and_listing() {
        let registry = PrototypeRegistry::new();
        let handle = registry.register_value("b", Badge { level: 2 }).unwrap();
        registry.register_value("a", Badge { level: 1 }).unwrap();
        assert_eq!(registry.keys(), vec!["a", "b"]);

        assert!(registry.unregister("b"));
        assert!(!registry.unregister("b"));
        assert!(!registry.contains("b"));
        // The caller's handle outlives the entry.
        assert_eq!(handle.read().level, 2);
    }

    #[test]
    fn concurrent_register_and_get_never_tear() {
        let registry = Arc::new(PrototypeRegistry::new());
        let handle = registry
            .register_value("memo", Memo::new("v0", &["v0"]))
            .unwrap();

        std::thread::scope(|s| {
            s.spawn(|| {
                for i in 1..200 {
                    let version = format!("v{i}");
                    handle.update(|memo| {
                        memo.title = version.clone();
                        memo.tags = vec![version.clone()];
                    });
                }
            });
            s.spawn(|| {
                for i in 0..200 {
                    let version = format!("r{i}");
                    registry
                        .register_value("memo", Memo::new(&version, &[&version]))
                        .unwrap();
                }
            });
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..200 {
                        let memo: Memo = registry.get_prototype("memo").unwrap();
                        assert_eq!(memo.tags, vec![memo.title.clone()]);
                    }
                });
            }
        });
    }
}
