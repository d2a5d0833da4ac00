//! # Registry Actor
//!
//! This module defines the [`RegistryActor`], which serves a [`PrototypeRegistry`]
//! from a single Tokio task. Requests arrive over an mpsc channel and are handled
//! one at a time, which gives the registry a single exclusive-access region without
//! callers ever touching a lock.

use crate::client::RegistryClient;
use crate::message::RegistryRequest;
use crate::registry::PrototypeRegistry;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Channel capacity used when the caller has no preference.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// The server half of a channel-served prototype registry.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `RegistryActor::new()` to get the `actor` (server) and `client`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client freely; dropping every client stops the actor.
///
/// ```rust
/// use prototype_framework::{Prototype, PrototypeStore, RegistryActor};
///
/// #[derive(Debug, PartialEq)]
/// struct Slide { heading: String }
///
/// impl Prototype for Slide {
///     fn clone_prototype(&self) -> Self { Self { heading: self.heading.clone() } }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = RegistryActor::new(10);
///     let task = tokio::spawn(actor.run());
///
///     client.register_value("intro", Slide { heading: "Welcome".into() }).await.unwrap();
///     let slide: Slide = client.get_prototype("intro").await.unwrap();
///     assert_eq!(slide.heading, "Welcome");
///
///     drop(client);
///     task.await.unwrap();
/// }
/// ```
pub struct RegistryActor {
    receiver: mpsc::Receiver<RegistryRequest>,
    registry: PrototypeRegistry,
}

impl RegistryActor {
    /// Creates a new `RegistryActor` and its associated `RegistryClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, RegistryClient) {
        Self::with_registry(buffer_size, PrototypeRegistry::new())
    }

    /// Like [`new`](Self::new), serving an already populated registry.
    pub fn with_registry(
        buffer_size: usize,
        registry: PrototypeRegistry,
    ) -> (Self, RegistryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, registry };
        (actor, RegistryClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// Returns the registry so its templates can outlive the actor.
    pub async fn run(mut self) -> PrototypeRegistry {
        info!(size = self.registry.len(), "Registry actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RegistryRequest::Register {
                    key,
                    entry,
                    respond_to,
                } => {
                    debug!(%key, "Register");
                    let _ = respond_to.send(self.registry.insert_entry(key, entry));
                }
                RegistryRequest::Clone { key, respond_to } => {
                    debug!(%key, "Clone");
                    let _ = respond_to.send(self.registry.clone_entry(&key));
                }
                RegistryRequest::Unregister { key, respond_to } => {
                    debug!(%key, "Unregister");
                    let _ = respond_to.send(Ok(self.registry.unregister(&key)));
                }
                RegistryRequest::Keys { respond_to } => {
                    let _ = respond_to.send(Ok(self.registry.keys()));
                }
            }
        }

        info!(size = self.registry.len(), "Registry actor shutdown");
        self.registry
    }
}
