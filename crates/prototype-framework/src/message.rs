//! # Registry Messages
//!
//! This module defines the requests exchanged between the
//! [`RegistryClient`](crate::RegistryClient) and the [`RegistryActor`](crate::RegistryActor).

use crate::entry::{ClonedPrototype, PrototypeEntry};
use crate::error::RegistryError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the registry actor.
pub type Response<T> = oneshot::Sender<Result<T, RegistryError>>;

/// Request sent to the registry actor.
///
/// The variants map onto the registry operations: upsert (`Register`), clone-on-read
/// (`Clone`), plus the `Unregister` and `Keys` conveniences. The actor answers each
/// one in arrival order, so a `Register` can never land in the middle of a `Clone`.
pub enum RegistryRequest {
    Register {
        key: String,
        entry: PrototypeEntry,
        respond_to: Response<()>,
    },
    Clone {
        key: String,
        respond_to: Response<ClonedPrototype>,
    },
    Unregister {
        key: String,
        respond_to: Response<bool>,
    },
    Keys {
        respond_to: Response<Vec<String>>,
    },
}
