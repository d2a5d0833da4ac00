//! # PrototypeStore Trait
//!
//! Provides one typed, async interface over both registry flavours: the in-process
//! [`PrototypeRegistry`] and the channel-served [`RegistryClient`]. Implementors
//! supply four untyped primitives; the typed `register`/`get_prototype` operations
//! are provided on top of them.

use crate::client::RegistryClient;
use crate::entry::{entry_of, ClonedPrototype, PrototypeEntry};
use crate::error::RegistryError;
use crate::prototype::{Prototype, PrototypeHandle};
use crate::registry::PrototypeRegistry;
use async_trait::async_trait;

/// Common interface for prototype registries.
///
/// # Example
///
/// ```rust
/// use prototype_framework::{Prototype, PrototypeRegistry, PrototypeStore, RegistryError};
///
/// #[derive(Debug)]
/// struct Card { title: String }
///
/// impl Prototype for Card {
///     fn clone_prototype(&self) -> Self { Self { title: self.title.clone() } }
/// }
///
/// // Written once, works with a local registry or a RegistryClient.
/// async fn title_of<S: PrototypeStore>(store: &S, key: &str) -> Result<String, RegistryError> {
///     Ok(store.get_prototype::<Card>(key).await?.title)
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let registry = PrototypeRegistry::new();
///     registry.register_value("card", Card { title: "Hello".into() }).unwrap();
///     assert_eq!(title_of(&registry, "card").await.unwrap(), "Hello");
/// }
/// ```
#[async_trait]
pub trait PrototypeStore: Send + Sync {
    /// Stores a type-erased entry, replacing any previous one under `key`.
    async fn insert_entry(&self, key: String, entry: PrototypeEntry) -> Result<(), RegistryError>;

    /// Clones the entry under `key` without checking its type.
    async fn clone_entry(&self, key: &str) -> Result<ClonedPrototype, RegistryError>;

    /// Removes the entry under `key`, returning whether it existed.
    async fn remove_entry(&self, key: &str) -> Result<bool, RegistryError>;

    /// Registered keys in sorted order.
    async fn keys(&self) -> Result<Vec<String>, RegistryError>;

    /// Registers a live template under `key`.
    async fn register<T: Prototype>(
        &self,
        key: &str,
        prototype: &PrototypeHandle<T>,
    ) -> Result<(), RegistryError> {
        self.insert_entry(key.to_string(), entry_of(prototype)).await
    }

    /// Registers `value` under `key` and returns the handle to the live template.
    async fn register_value<T: Prototype>(
        &self,
        key: &str,
        value: T,
    ) -> Result<PrototypeHandle<T>, RegistryError> {
        let handle = PrototypeHandle::new(value);
        self.register(key, &handle).await?;
        Ok(handle)
    }

    /// Returns a fresh clone of the template under `key`, checked to be a `T`.
    async fn get_prototype<T: Prototype>(&self, key: &str) -> Result<T, RegistryError> {
        self.clone_entry(key).await?.downcast::<T>().inspect_err(|e| {
            tracing::warn!(key, error = %e, "Type mismatch");
        })
    }

    async fn unregister(&self, key: &str) -> Result<bool, RegistryError> {
        self.remove_entry(key).await
    }
}

#[async_trait]
impl PrototypeStore for PrototypeRegistry {
    async fn insert_entry(&self, key: String, entry: PrototypeEntry) -> Result<(), RegistryError> {
        PrototypeRegistry::insert_entry(self, key, entry)
    }

    async fn clone_entry(&self, key: &str) -> Result<ClonedPrototype, RegistryError> {
        PrototypeRegistry::clone_entry(self, key)
    }

    async fn remove_entry(&self, key: &str) -> Result<bool, RegistryError> {
        Ok(PrototypeRegistry::unregister(self, key))
    }

    async fn keys(&self) -> Result<Vec<String>, RegistryError> {
        Ok(PrototypeRegistry::keys(self))
    }
}

#[async_trait]
impl PrototypeStore for RegistryClient {
    #[tracing::instrument(skip(self, entry))]
    async fn insert_entry(&self, key: String, entry: PrototypeEntry) -> Result<(), RegistryError> {
        tracing::debug!("Sending request");
        self.send_register(key, entry).await
    }

    #[tracing::instrument(skip(self))]
    async fn clone_entry(&self, key: &str) -> Result<ClonedPrototype, RegistryError> {
        tracing::debug!("Sending request");
        self.send_clone(key.to_string()).await
    }

    #[tracing::instrument(skip(self))]
    async fn remove_entry(&self, key: &str) -> Result<bool, RegistryError> {
        tracing::debug!("Sending request");
        self.send_unregister(key.to_string()).await
    }

    async fn keys(&self) -> Result<Vec<String>, RegistryError> {
        self.send_keys().await
    }
}
