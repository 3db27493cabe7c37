//! Slot type backing the resource registry
//!
//! Each platform handle lives in a [`Slot`]: either absent (never created or
//! already released) or valid. Release is idempotent, and dropping the
//! contained value is the only way the underlying resource is destroyed, so
//! no call site needs its own null-check before teardown.

/// Holds zero or one instance of a handle type
#[derive(Debug)]
pub struct Slot<T> {
    value: Option<T>,
}

impl<T> Slot<T> {
    /// An empty slot
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Store a handle, releasing any handle already present
    pub fn set(&mut self, value: T) {
        if self.value.is_some() {
            log::warn!("replacing a live handle in a registry slot");
        }
        self.value = Some(value);
    }

    /// The handle, or `None` if absent
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Mutable access to the handle, or `None` if absent
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Move the handle out, leaving the slot absent
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Whether a handle is present
    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    /// Release the handle if present
    ///
    /// Returns `true` if a handle was actually dropped. Releasing an absent
    /// slot is a no-op, not an error.
    pub fn release(&mut self) -> bool {
        self.value.take().is_some()
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::empty()
    }
}
