use core::{mem::MaybeUninit, ptr};

/// Inline storage for at most one `T`.
///
/// Layout note: `repr(C)` with `value` first, so the value lives at offset 0
/// of the slot (and of any `repr(transparent)` wrapper around it).
#[repr(C)]
pub(crate) struct Slot<T> {
    value: MaybeUninit<T>,
    occupied: bool,
}

impl<T> Slot<T> {
    #[inline(always)]
    pub(crate) const fn empty() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            occupied: false,
        }
    }

    #[inline(always)]
    pub(crate) const fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Address of the storage, valid whether or not a value is held.
    #[inline(always)]
    pub(crate) const fn as_ptr(&self) -> *const T {
        self.value.as_ptr()
    }

    #[inline(always)]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.value.as_mut_ptr()
    }

    #[inline]
    pub(crate) fn get(&self) -> Option<&T> {
        if self.occupied {
            // SAFETY: `occupied` is set.
            Some(unsafe { self.value.assume_init_ref() })
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self) -> Option<&mut T> {
        if self.occupied {
            // SAFETY: `occupied` is set and `&mut self` is exclusive.
            Some(unsafe { self.value.assume_init_mut() })
        } else {
            None
        }
    }

    /// Interprets the slot as `&T` without checking the flag.
    ///
    /// # Safety
    /// The slot must be occupied.
    #[inline(always)]
    pub(crate) unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.occupied, "unchecked access to an empty slot");
        // SAFETY: caller asserts the slot is occupied.
        unsafe { self.value.assume_init_ref() }
    }

    /// Interprets the slot as `&mut T` without checking the flag.
    ///
    /// # Safety
    /// The slot must be occupied.
    #[inline(always)]
    pub(crate) unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.occupied, "unchecked access to an empty slot");
        // SAFETY: caller asserts the slot is occupied; `&mut self` is exclusive.
        unsafe { self.value.assume_init_mut() }
    }

    /// Drops the held value, if any, leaving the slot empty.
    ///
    /// The flag is cleared first: if `T::drop` panics the slot is already
    /// empty and will not drop the value a second time.
    #[inline]
    pub(crate) fn clear(&mut self) {
        if !self.occupied {
            return;
        }
        self.occupied = false;
        #[cfg(feature = "tracing")]
        tracing::trace!(ty = core::any::type_name::<T>(), "destroying tub occupant");
        // SAFETY: the flag was set, so `value` is initialized; it is now
        // logically empty and will not be read or dropped again.
        unsafe { ptr::drop_in_place(self.value.as_mut_ptr()) }
    }

    /// Clears the slot, then stores the value produced by `init`.
    ///
    /// `init` runs while the slot is empty. If it returns `Err` or unwinds,
    /// the slot stays empty and nothing is dropped on its behalf.
    #[inline]
    pub(crate) fn fill_with<E, F>(&mut self, init: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.clear();
        let value = init()?;
        #[cfg(feature = "tracing")]
        tracing::trace!(ty = core::any::type_name::<T>(), "constructed tub occupant");
        self.occupied = true;
        Ok(self.value.write(value))
    }

    /// Moves the value out, leaving the slot empty.
    #[inline]
    pub(crate) fn take(&mut self) -> Option<T> {
        if !self.occupied {
            return None;
        }
        self.occupied = false;
        // SAFETY: the flag was set; clearing it first transfers ownership of
        // the bytes to the returned value.
        Some(unsafe { self.value.assume_init_read() })
    }
}

impl<T> Drop for Slot<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
