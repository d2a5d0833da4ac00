//! # Registry Client
//!
//! This module defines the client half of the channel-served registry.

use crate::entry::{ClonedPrototype, PrototypeEntry};
use crate::error::RegistryError;
use crate::message::RegistryRequest;
use tokio::sync::{mpsc, oneshot};

/// A handle for talking to a [`RegistryActor`](crate::RegistryActor).
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – the typed operations come from [`PrototypeStore`](crate::PrototypeStore).
#[derive(Clone)]
pub struct RegistryClient {
    sender: mpsc::Sender<RegistryRequest>,
}

impl RegistryClient {
    pub fn new(sender: mpsc::Sender<RegistryRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, RegistryError>>) -> RegistryRequest,
    ) -> Result<T, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| RegistryError::ActorClosed)?;
        response.await.map_err(|_| RegistryError::ActorDropped)?
    }

    pub(crate) async fn send_register(
        &self,
        key: String,
        entry: PrototypeEntry,
    ) -> Result<(), RegistryError> {
        self.request(|respond_to| RegistryRequest::Register {
            key,
            entry,
            respond_to,
        })
        .await
    }

    pub(crate) async fn send_clone(&self, key: String) -> Result<ClonedPrototype, RegistryError> {
        self.request(|respond_to| RegistryRequest::Clone { key, respond_to })
            .await
    }

    pub(crate) async fn send_unregister(&self, key: String) -> Result<bool, RegistryError> {
        self.request(|respond_to| RegistryRequest::Unregister { key, respond_to })
            .await
    }

    pub(crate) async fn send_keys(&self) -> Result<Vec<String>, RegistryError> {
        self.request(|respond_to| RegistryRequest::Keys { respond_to })
            .await
    }

    /// Returns `true` once the actor has stopped receiving.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
