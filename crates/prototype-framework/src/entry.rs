//! # Type-Erased Entries
//!
//! A registry holds templates of many concrete types under one map, so each
//! [`PrototypeHandle`] is stored behind the object-safe [`ErasedPrototype`] trait.
//! Cloning through the trait yields a [`ClonedPrototype`], and
//! [`ClonedPrototype::downcast`] is the single checked boundary where the caller's
//! requested type is compared with the stored one.

use crate::error::RegistryError;
use crate::prototype::{short_type_name, Prototype, PrototypeHandle};
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Object-safe view of a registered template.
pub trait ErasedPrototype: Send + Sync {
    /// Clones the template and boxes the copy.
    fn clone_boxed(&self) -> Box<dyn Any + Send>;

    fn prototype_type_id(&self) -> TypeId;

    fn prototype_type_name(&self) -> &'static str;
}

impl<T: Prototype> ErasedPrototype for PrototypeHandle<T> {
    fn clone_boxed(&self) -> Box<dyn Any + Send> {
        Box::new(self.snapshot())
    }

    fn prototype_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn prototype_type_name(&self) -> &'static str {
        short_type_name::<T>()
    }
}

/// Shared pointer to a registered template, as stored in a registry map.
pub type PrototypeEntry = Arc<dyn ErasedPrototype>;

/// Wraps a handle as a registry entry. The entry shares the handle's template.
pub fn entry_of<T: Prototype>(handle: &PrototypeHandle<T>) -> PrototypeEntry {
    Arc::new(handle.clone())
}

/// A fresh clone taken from a store, not yet checked against the caller's type.
pub struct ClonedPrototype {
    key: String,
    type_name: &'static str,
    value: Box<dyn Any + Send>,
}

impl ClonedPrototype {
    /// Clones the template behind `entry`.
    pub fn capture(key: impl Into<String>, entry: &dyn ErasedPrototype) -> Self {
        Self {
            key: key.into(),
            type_name: entry.prototype_type_name(),
            value: entry.clone_boxed(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Short name of the concrete type that was cloned.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Prototype>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Unwraps the clone as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::TypeMismatch`] if the clone is not a `T`.
    pub fn downcast<T: Prototype>(self) -> Result<T, RegistryError> {
        let Self {
            key,
            type_name,
            value,
        } = self;
        value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| RegistryError::TypeMismatch {
                key,
                requested: short_type_name::<T>(),
                actual: type_name,
            })
    }
}

impl fmt::Debug for ClonedPrototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClonedPrototype")
            .field("key", &self.key)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
