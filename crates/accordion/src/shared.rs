//! Sharing a controller between the UI thread and background work.
//!
//! The model is single-writer. When items are loaded on a background thread,
//! wrap the controller in a [`SharedAccordion`]: every mutation goes through
//! [`SharedAccordion::write`], which serializes writers behind a lock, while
//! readers take [`Projection`] snapshots that stay valid no matter what
//! happens to the model afterwards.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::controller::AccordionController;
use crate::model::Projection;

/// A cloneable, thread-safe handle to an [`AccordionController`].
pub struct SharedAccordion<T, K = String> {
    inner: Arc<RwLock<AccordionController<T, K>>>,
}

impl<T, K> Clone for SharedAccordion<T, K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, K> SharedAccordion<T, K> {
    /// Wraps a controller for shared use.
    pub fn new(controller: AccordionController<T, K>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(controller)),
        }
    }

    /// Runs `f` with exclusive access. Writers never interleave.
    ///
    /// Model signals fire synchronously inside `f`, while the write lock is
    /// held. The lock is not reentrant: a slot must not call [`read`],
    /// [`write`], [`snapshot`] or [`version`] on the same handle, or it
    /// deadlocks. Slots that need the controller should use [`try_read`]
    /// or record what they saw and act after `write` returns.
    ///
    /// [`read`]: Self::read
    /// [`write`]: Self::write
    /// [`snapshot`]: Self::snapshot
    /// [`version`]: Self::version
    /// [`try_read`]: Self::try_read
    pub fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AccordionController<T, K>) -> R,
    {
        f(&mut *self.inner.write())
    }

    /// Runs `f` with shared access.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AccordionController<T, K>) -> R,
    {
        f(&*self.inner.read())
    }

    /// Runs `f` with shared access if no writer holds the lock.
    ///
    /// Returns `None` instead of blocking, so it is safe to call from a
    /// signal slot.
    pub fn try_read<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&AccordionController<T, K>) -> R,
    {
        self.inner.try_read().map(|guard| f(&*guard))
    }

    /// Takes an immutable snapshot of the visible rows.
    pub fn snapshot(&self) -> Projection {
        self.inner.read().projection()
    }

    /// Returns the current model version.
    pub fn version(&self) -> u64 {
        self.inner.read().model().version()
    }
}

impl<T, K: Ord> SharedAccordion<T, K> {
    /// Applies a user sort request under the write lock.
    pub fn request_sort(&self) -> Projection {
        self.inner.write().on_sort_requested()
    }
}
