//! Narrowing conversions between the containers, and interop with
//! `core::result::Result`.
//!
//! Narrowing only goes one way, from the more specific container to the
//! less specific one:
//!
//! ```text
//! TypedResult<T, E>  ->  Result<T>  ->  UnitResult
//! ```
//!
//! The success/error flag always survives; the value is dropped when
//! narrowing to [`UnitResult`]. A typed error either already is an error
//! type and is carried through as is (`to_result`, `to_unit`), or it is
//! rendered to a string and boxed as a [`Message`] (`to_result_lossy`,
//! `to_unit_lossy`). The caller picks, at compile time.

use alloc::string::ToString;
use core::fmt;

use crate::{Error, Message, Result, TypedResult, UnitResult};

fn render<E: fmt::Display>(error: E) -> Error {
    let message = error.to_string();
    debug!("rendering {} into a generic error", core::any::type_name::<E>());
    Error::new(Message(message))
}

impl<T> Result<T> {
    /// Drop the value, keep the flag and the error object.
    pub fn to_unit(self) -> UnitResult {
        UnitResult { error: self.inner.err() }
    }

    pub fn into_std(self) -> core::result::Result<T, Error> {
        self.inner
    }
}

impl<T, E> TypedResult<T, E> {
    /// Narrow to [`Result<T>`], carrying the error object through unchanged.
    pub fn to_result(self) -> Result<T>
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Result { inner: self.inner.map_err(Error::new) }
    }

    /// Narrow to [`Result<T>`], rendering the error with `Display` and
    /// boxing the rendition as a [`Message`].
    pub fn to_result_lossy(self) -> Result<T>
    where
        E: fmt::Display,
    {
        Result { inner: self.inner.map_err(render) }
    }

    /// Narrow to [`UnitResult`], carrying the error object through unchanged.
    pub fn to_unit(self) -> UnitResult
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        self.to_result().to_unit()
    }

    /// Narrow to [`UnitResult`], with the rendering rule of
    /// [`to_result_lossy`][Self::to_result_lossy].
    pub fn to_unit_lossy(self) -> UnitResult
    where
        E: fmt::Display,
    {
        self.to_result_lossy().to_unit()
    }

    pub fn into_std(self) -> core::result::Result<T, E> {
        self.inner
    }
}

impl<T> From<Result<T>> for UnitResult {
    fn from(result: Result<T>) -> Self {
        result.to_unit()
    }
}

impl<T, E> From<TypedResult<T, E>> for Result<T>
where
    E: core::error::Error + Send + Sync + 'static,
{
    fn from(result: TypedResult<T, E>) -> Self {
        result.to_result()
    }
}

impl<T, E> From<TypedResult<T, E>> for UnitResult
where
    E: core::error::Error + Send + Sync + 'static,
{
    fn from(result: TypedResult<T, E>) -> Self {
        result.to_unit()
    }
}

impl<T, E: Into<Error>> From<core::result::Result<T, E>> for Result<T> {
    fn from(result: core::result::Result<T, E>) -> Self {
        Result { inner: result.map_err(Into::into) }
    }
}

impl<T> From<Result<T>> for core::result::Result<T, Error> {
    fn from(result: Result<T>) -> Self {
        result.into_std()
    }
}

impl<T, E> From<core::result::Result<T, E>> for TypedResult<T, E> {
    fn from(inner: core::result::Result<T, E>) -> Self {
        TypedResult { inner }
    }
}

impl<T, E> From<TypedResult<T, E>> for core::result::Result<T, E> {
    fn from(result: TypedResult<T, E>) -> Self {
        result.into_std()
    }
}

impl<E: Into<Error>> From<core::result::Result<(), E>> for UnitResult {
    fn from(result: core::result::Result<(), E>) -> Self {
        UnitResult { error: result.err().map(Into::into) }
    }
}

impl From<UnitResult> for core::result::Result<(), Error> {
    fn from(result: UnitResult) -> Self {
        match result.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
