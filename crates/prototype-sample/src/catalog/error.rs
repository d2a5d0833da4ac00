//! Error types for the template catalog.

use prototype_framework::RegistryError;
use thiserror::Error;

/// Errors that can occur while building, using or stopping a template catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A registry operation failed (missing key, wrong type, closed actor).
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The registry actor task panicked or was cancelled.
    #[error("Registry task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
