//! Total ways of getting the value out. None of these ever fail.

use crate::{Result, TypedResult};

impl<T> Result<T> {
    /// The value, or `T::default()` on error.
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.inner.unwrap_or_default()
    }

    /// The value, or `fallback` on error.
    pub fn value_or(self, fallback: T) -> T {
        self.inner.unwrap_or(fallback)
    }

    /// The value, or `None` on error.
    pub fn value_or_none(self) -> Option<T> {
        self.inner.ok()
    }
}

impl<T, E> TypedResult<T, E> {
    /// The value, or `T::default()` on error.
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.inner.unwrap_or_default()
    }

    /// The value, or `fallback` on error.
    pub fn value_or(self, fallback: T) -> T {
        self.inner.unwrap_or(fallback)
    }

    /// The value, or `None` on error.
    pub fn value_or_none(self) -> Option<T> {
        self.inner.ok()
    }
}
