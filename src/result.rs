//! `Result<T>`: a value, or a generic error.

use alloc::string::String;
use core::fmt;

use ref_cast::RefCast;

use crate::{Error, InvalidState};

/// A value of type `T`, or a generic [`Error`].
///
/// Not to be confused with `core::result::Result`, which this wraps.
/// Success is the absence of an error object; the error slot of a success
/// and the value slot of an error simply do not exist.
#[repr(transparent)]
#[derive(Clone, Debug, PartialEq, Eq, Hash, RefCast)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Result<T> {
    pub(crate) inner: core::result::Result<T, Error>,
}

impl<T> Result<T> {
    pub const fn ok(value: T) -> Self {
        Result { inner: Ok(value) }
    }

    /// Error from an error object, or anything convertible into one.
    pub fn error(error: impl Into<Error>) -> Self {
        Result { inner: Err(error.into()) }
    }

    /// Error from a plain message.
    pub fn error_msg(message: impl Into<String>) -> Self {
        Self::error(Error::msg(message))
    }

    /// Borrow a `core::result::Result` as a container, without moving it.
    pub fn from_std_ref(result: &core::result::Result<T, Error>) -> &Self {
        Self::ref_cast(result)
    }

    pub fn as_std(&self) -> &core::result::Result<T, Error> {
        &self.inner
    }

    pub const fn is_success(&self) -> bool {
        self.inner.is_ok()
    }

    pub const fn is_error(&self) -> bool {
        self.inner.is_err()
    }

    /// Fails with [`InvalidState::NoValue`] on error.
    pub fn value(&self) -> core::result::Result<&T, InvalidState> {
        match &self.inner {
            Ok(value) => Ok(value),
            Err(_) => {
                warn!("{}", crate::messages::NO_VALUE);
                Err(InvalidState::NoValue)
            }
        }
    }

    /// The owned counterpart of [`value`][Self::value].
    pub fn into_value(self) -> core::result::Result<T, InvalidState> {
        match self.inner {
            Ok(value) => Ok(value),
            Err(_) => {
                warn!("{}", crate::messages::NO_VALUE);
                Err(InvalidState::NoValue)
            }
        }
    }

    /// Fails with [`InvalidState::NoError`] on success.
    pub fn get_error(&self) -> core::result::Result<&Error, InvalidState> {
        match &self.inner {
            Err(error) => Ok(error),
            Ok(_) => {
                warn!("{}", crate::messages::NO_ERROR);
                Err(InvalidState::NoError)
            }
        }
    }

    pub fn try_get_value(&self) -> Option<&T> {
        self.inner.as_ref().ok()
    }

    pub fn try_get_error(&self) -> Option<&Error> {
        self.inner.as_ref().err()
    }

    pub fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(&self.inner, Ok(v) if v == value)
    }

    /// True iff this is an error holding that very error object.
    pub fn contains_error(&self, error: &Error) -> bool {
        matches!(&self.inner, Err(e) if e.ptr_eq(error))
    }
}

impl<T: fmt::Display> fmt::Display for Result<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => write!(f, "Result({})", value),
            Err(error) => error.render(f),
        }
    }
}
