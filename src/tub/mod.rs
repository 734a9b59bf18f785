//! `Tub` — inline storage for at most one value, constructed explicitly.
//!
//! A `Tub<T>` reserves space for a `T` inside whatever holds the tub (a stack
//! frame, a struct field, a `Vec` element) without constructing one. The value
//! is built in place later with [`Tub::construct`] or one of its variants, and
//! is dropped when the tub is re-constructed, destroyed, or itself dropped.
//!
//! Unlike `Option<T>` the layout never uses niches: the value is always at
//! offset 0 and the tub has exactly the alignment of `T`.

mod traits;

#[cfg(feature = "serde")]
mod serde;

#[cfg(test)]
mod tests;

use crate::raw::Slot;

/// Optionally-constructed inline storage for one `T`.
///
/// # Example
///
/// ```rust
/// use tub::Tub;
///
/// let mut tub: Tub<Vec<u32>> = Tub::new();
/// assert!(!tub.is_present());
///
/// tub.construct_with(|| vec![1, 2, 3]);
/// assert!(tub.is_present());
/// assert_eq!(tub.len(), 3);
///
/// // Re-construction drops the old value first.
/// tub.construct(Vec::new());
/// assert!(tub.is_empty());
/// ```
#[repr(transparent)]
pub struct Tub<T> {
    slot: Slot<T>,
}

impl<T> Tub<T> {
    /// Creates an empty tub.
    #[inline]
    pub const fn new() -> Self {
        Self { slot: Slot::empty() }
    }

    /// Returns `true` if the tub holds a value.
    #[inline(always)]
    pub const fn is_present(&self) -> bool {
        self.slot.is_occupied()
    }

    /// Destroys any current value, then stores `value` and returns it.
    #[inline]
    pub fn construct(&mut self, value: T) -> &mut T {
        self.construct_with(|| value)
    }

    /// Destroys any current value, then stores the value built by `init`.
    ///
    /// The old value is dropped before `init` runs. If `init` panics, the tub
    /// is left empty.
    #[inline]
    pub fn construct_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.slot.fill_with(|| Ok::<T, core::convert::Infallible>(init())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Destroys any current value, then tries to build a new one.
    ///
    /// On `Err` the error is returned unchanged and the tub is left empty;
    /// no destructor runs for the value that was never built.
    ///
    /// # Errors
    /// Returns whatever `init` returns.
    #[inline]
    pub fn try_construct_with<E, F>(&mut self, init: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.slot.fill_with(init)
    }

    /// Returns the held value, constructing it with `init` first if absent.
    #[inline]
    pub fn get_or_construct_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.slot.is_occupied() {
            // SAFETY: checked above.
            unsafe { self.slot.get_unchecked_mut() }
        } else {
            self.construct_with(init)
        }
    }

    /// Drops the held value, if any, leaving the tub empty.
    #[inline]
    pub fn destroy(&mut self) {
        self.slot.clear();
    }

    /// Moves the held value out, leaving the tub empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }

    /// Stores `value`, returning the previous value if there was one.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        let old = self.slot.take();
        self.construct(value);
        old
    }

    /// Consumes the tub, returning its value if present.
    #[inline]
    pub fn into_inner(mut self) -> Option<T> {
        self.slot.take()
    }

    /// Returns a shared reference to the value if present.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Returns an exclusive reference to the value if present.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.slot.get_mut()
    }

    /// Returns a shared reference to the value without checking presence.
    ///
    /// # Safety
    /// The tub must be present.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        // SAFETY: forwarded to the caller.
        unsafe { self.slot.get_unchecked() }
    }

    /// Returns an exclusive reference to the value without checking presence.
    ///
    /// # Safety
    /// The tub must be present.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        // SAFETY: forwarded to the caller.
        unsafe { self.slot.get_unchecked_mut() }
    }

    /// Address of the storage.
    ///
    /// Equal to the tub's own address. Only dereferenceable while present.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.slot.as_ptr()
    }

    /// Mutable address of the storage.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slot.as_mut_ptr()
    }
}
