//! # Registry Errors
//!
//! This module defines the error type shared by every prototype store. Both the
//! in-process [`PrototypeRegistry`](crate::PrototypeRegistry) and the
//! channel-served [`RegistryClient`](crate::RegistryClient) report failures
//! through [`RegistryError`], so callers can match on the same variants no matter
//! which store they hold.

/// Errors that can occur while registering or retrieving prototypes.
///
/// `NotFound`, `TypeMismatch` and `EmptyKey` are deterministic: retrying with
/// the same key and requested type gives the same outcome.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No prototype is registered under the requested key.
    #[error("Prototype not found: {0}")]
    NotFound(String),

    /// The stored prototype is not of the type requested by the caller.
    #[error("Prototype '{key}' is a {actual}, not a {requested}")]
    TypeMismatch {
        key: String,
        requested: &'static str,
        actual: &'static str,
    },

    /// Prototype keys must be non-empty.
    #[error("Prototype key must not be empty")]
    EmptyKey,

    #[error("Registry actor closed")]
    ActorClosed,

    #[error("Registry actor dropped response channel")]
    ActorDropped,
}
