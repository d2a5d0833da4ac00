//! # Prototype Trait & Live Templates
//!
//! The [`Prototype`] trait is the cloning contract every template type must satisfy:
//! "produce an independent copy of myself". It is implemented by each concrete type
//! over itself, so a caller always gets back the same concrete type without a cast.
//!
//! # Deep Copy Contract
//!
//! An implementation of [`Prototype::clone_prototype`] must return a value that:
//! - is a distinct instance from the receiver,
//! - has every scalar field equal to the receiver's at call time,
//! - owns freshly allocated collections holding equal elements in the same order.
//!
//! After the call, mutating either value must never be observable through the other.
//!
//! # Live Templates
//!
//! A registry stores *the object able to clone itself*, not a snapshot taken at
//! registration. Rust values have one owner, so that shared object is expressed as a
//! [`PrototypeHandle`]: a lock-protected cell shared between the caller that keeps
//! configuring the template and the registry that clones it on every retrieval.
//! The handle is the only place where a template is aliased. Values produced by
//! [`PrototypeHandle::snapshot`] are plain owned values.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Capability of producing an independent deep copy of `self`.
///
/// # Example
///
/// ```rust
/// use prototype_framework::Prototype;
///
/// #[derive(Debug, PartialEq)]
/// struct Note {
///     title: String,
///     tags: Vec<String>,
/// }
///
/// impl Prototype for Note {
///     fn clone_prototype(&self) -> Self {
///         Self {
///             title: self.title.clone(),
///             tags: self.tags.iter().cloned().collect(),
///         }
///     }
/// }
///
/// let original = Note { title: "T1".into(), tags: vec!["a".into()] };
/// let mut copy = original.clone_prototype();
/// copy.tags.push("b".into());
///
/// assert_eq!(original.tags, vec!["a"]);
/// assert_eq!(copy.tags, vec!["a", "b"]);
/// ```
pub trait Prototype: Any + Send + Sync {
    /// Returns a new, fully independent instance equal to `self` at call time.
    fn clone_prototype(&self) -> Self;
}

/// Short type name used in logs and errors (e.g. `Document` instead of the full path).
///
/// Generic types keep their full name so distinct instantiations never collide.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    if full.contains('<') {
        return full;
    }
    full.rsplit("::").next().unwrap_or(full)
}

/// Shared handle to a live prototype template.
///
/// Cloning the handle does **not** clone the template: both handles refer to the same
/// value. Use [`snapshot`](Self::snapshot) to get an independent copy.
///
/// A poisoned lock is recovered: the template is handed out as last written.
pub struct PrototypeHandle<T: Prototype> {
    inner: Arc<RwLock<T>>,
}

impl<T: Prototype> PrototypeHandle<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Borrows the template for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mutates the template in place and returns the closure's result.
    ///
    /// The write lock is held only for the duration of `f`, which cannot await.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *self.write())
    }

    /// Produces an independent copy of the template as it is right now.
    pub fn snapshot(&self) -> T {
        self.read().clone_prototype()
    }

    /// Returns `true` if both handles refer to the same template.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl<T: Prototype> Clone for PrototypeHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Prototype> From<T> for PrototypeHandle<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Prototype + fmt::Debug> fmt::Debug for PrototypeHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrototypeHandle").field(&*self.read()).finish()
    }
}
