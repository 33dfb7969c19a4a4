//! Transform the live slot, keep the other one.

use crate::{Error, Result, TypedResult};

impl<T> Result<T> {
    /// Success: `Result<U>` holding `transform(value)`. Error: the same
    /// error object, `transform` is not called.
    pub fn map<U, F>(self, transform: F) -> Result<U>
    where
        F: FnOnce(T) -> U,
    {
        Result { inner: self.inner.map(transform) }
    }

    /// Error: a typed container holding `transform(error)`. Success: the
    /// same value, `transform` is not called.
    pub fn map_error<R, F>(self, transform: F) -> TypedResult<T, R>
    where
        F: FnOnce(Error) -> R,
    {
        TypedResult { inner: self.inner.map_err(transform) }
    }
}

impl<T, E> TypedResult<T, E> {
    /// Success: holding `transform(value)`. Error: the same error,
    /// `transform` is not called.
    pub fn map<U, F>(self, transform: F) -> TypedResult<U, E>
    where
        F: FnOnce(T) -> U,
    {
        TypedResult { inner: self.inner.map(transform) }
    }

    /// Error: holding `transform(error)`. Success: the same value,
    /// `transform` is not called.
    pub fn map_error<R, F>(self, transform: F) -> TypedResult<T, R>
    where
        F: FnOnce(E) -> R,
    {
        TypedResult { inner: self.inner.map_err(transform) }
    }
}
