//! Lazy slot primitive
//!
//! [`SlotCell`] is the backing cell behind every named dependency slot: an
//! optional `Arc` guarded by an async `RwLock`. It starts empty and fills at
//! most once through [`SlotCell::get_or_try_init`]; explicit
//! [`SlotCell::set`] may place or replace the value at any time.
//!
//! ## Concurrency contract
//!
//! The first accessor to observe an empty slot constructs under the write
//! lock. Concurrent first-accessors serialize on that lock, re-check, and
//! observe the finished instance - construction happens at most once per
//! slot no matter how many tasks race.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use lazywire_domain::error::Result;

/// A named, lazily-resolved reference to a shared service
pub struct SlotCell<T: ?Sized> {
    name: &'static str,
    inner: RwLock<Option<Arc<T>>>,
}

impl<T: ?Sized> SlotCell<T> {
    /// Create an empty slot with the given name
    pub fn empty(name: &'static str) -> Self {
        Self {
            name,
            inner: RwLock::new(None),
        }
    }

    /// Slot name, used in logs and error messages
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the slot currently holds a value
    pub async fn is_resolved(&self) -> bool {
        self.inner.read().await.is_some()
    }

    /// Current value without triggering resolution
    pub async fn peek(&self) -> Option<Arc<T>> {
        self.inner.read().await.clone()
    }

    /// Place or replace the slot's value, bypassing lazy construction
    pub async fn set(&self, value: Arc<T>) {
        let mut guard = self.inner.write().await;
        debug!(slot = self.name, "Slot value injected");
        *guard = Some(value);
    }

    /// Return the cached value, constructing it on first access
    ///
    /// A failed construction leaves the slot empty and propagates the error
    /// unchanged; nothing is retried inside this call.
    pub async fn get_or_try_init<F>(&self, init: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> Result<Arc<T>>,
    {
        if let Some(value) = self.inner.read().await.as_ref() {
            return Ok(value.clone());
        }

        let mut guard = self.inner.write().await;
        // Another task may have resolved the slot while we waited
        if let Some(value) = guard.as_ref() {
            return Ok(value.clone());
        }

        let value = init()?;
        debug!(slot = self.name, "Slot resolved on first access");
        *guard = Some(value.clone());
        Ok(value)
    }
}

impl<T: ?Sized> std::fmt::Debug for SlotCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotCell").field("name", &self.name).finish()
    }
}
