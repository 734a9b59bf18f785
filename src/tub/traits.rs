use core::{
    fmt,
    ops::{Deref, DerefMut},
};

use super::Tub;

const ABSENT_DEREF: &str = "dereferenced an absent Tub";

impl<T> Default for Tub<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Tub<T> {
    fn clone(&self) -> Self {
        match self.get() {
            Some(value) => Self::from(value.clone()),
            None => Self::new(),
        }
    }

    /// Drops the destination's value before cloning the source into it.
    fn clone_from(&mut self, source: &Self) {
        match source.get() {
            Some(value) => {
                self.construct_with(|| value.clone());
            }
            None => self.destroy(),
        }
    }
}

impl<T> From<T> for Tub<T> {
    #[inline]
    fn from(value: T) -> Self {
        let mut tub = Self::new();
        tub.construct(value);
        tub
    }
}

impl<T> From<Option<T>> for Tub<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::new, Self::from)
    }
}

impl<T> From<Tub<T>> for Option<T> {
    #[inline]
    fn from(tub: Tub<T>) -> Self {
        tub.into_inner()
    }
}

impl<T> From<&Tub<T>> for bool {
    #[inline]
    fn from(tub: &Tub<T>) -> Self {
        tub.is_present()
    }
}

/// Panics if the tub is absent; check [`Tub::is_present`] first.
impl<T> Deref for Tub<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => panic!("{ABSENT_DEREF}"),
        }
    }
}

/// Panics if the tub is absent; check [`Tub::is_present`] first.
impl<T> DerefMut for Tub<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        match self.get_mut() {
            Some(value) => value,
            None => panic!("{ABSENT_DEREF}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tub<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Tub").field(value).finish(),
            None => f.write_str("Tub(<absent>)"),
        }
    }
}

impl<T: PartialEq> PartialEq for Tub<T> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq> Eq for Tub<T> {}
