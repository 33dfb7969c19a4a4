//! The unit container: success, or a generic error.

use alloc::string::String;
use core::fmt;

use crate::{messages, Error, InvalidState};

/// Success without payload, or a generic [`Error`].
///
/// Success *is* the absence of an error object. The default value is
/// the success.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct UnitResult {
    pub(crate) error: Option<Error>,
}

impl UnitResult {
    pub const fn ok() -> Self {
        UnitResult { error: None }
    }

    /// Error from an error object, or anything convertible into one.
    pub fn error(error: impl Into<Error>) -> Self {
        UnitResult { error: Some(error.into()) }
    }

    /// Error from a plain message.
    pub fn error_msg(message: impl Into<String>) -> Self {
        Self::error(Error::msg(message))
    }

    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Fails with [`InvalidState::NoError`] on success.
    pub fn get_error(&self) -> core::result::Result<&Error, InvalidState> {
        match &self.error {
            Some(error) => Ok(error),
            None => {
                warn!("{}", messages::NO_ERROR);
                Err(InvalidState::NoError)
            }
        }
    }

    pub fn try_get_error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// True iff this is an error holding that very error object.
    pub fn contains_error(&self, error: &Error) -> bool {
        self.error.as_ref().map_or(false, |e| e.ptr_eq(error))
    }
}

impl fmt::Display for UnitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None => write!(f, "Result({})", messages::OK),
            Some(error) => error.render(f),
        }
    }
}
