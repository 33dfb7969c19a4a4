//! Raising the stored error on request.
//!
//! The stored error comes back as the `Err` of a `core::result::Result`,
//! so that callers propagate it with `?`. Where the container survives
//! (`throw_if_error`, `throw_if_type`) it is handed back in the `Ok`.
//!
//! For [`TypedResult`], raising requires `E: core::error::Error`; this is
//! checked when the call is compiled.

use core::any::TypeId;

use crate::{Error, Result, TypedResult, UnitResult};

// The stored error is logged by message: for boxed errors the static
// type name is only the trait object's.
fn raise(error: Error) -> Error {
    debug!("raising {}", error);
    error
}

impl UnitResult {
    /// Error: raises the stored error. Success: hands the container back.
    pub fn throw_if_error(self) -> core::result::Result<Self, Error> {
        match self.error {
            Some(error) => Err(raise(error)),
            None => Ok(self),
        }
    }

    /// Raises the stored error iff its runtime type is exactly `X`.
    /// Otherwise, including on error of any other type, hands the
    /// container back unchanged.
    pub fn throw_if_type<X>(self) -> core::result::Result<Self, Error>
    where
        X: core::error::Error + 'static,
    {
        match self.error {
            Some(error) if error.is::<X>() => Err(raise(error)),
            error => {
                if error.is_some() {
                    trace!("stored error is not {}", core::any::type_name::<X>());
                }
                Ok(UnitResult { error })
            }
        }
    }
}

impl<T> Result<T> {
    /// The value, or the stored error raised.
    pub fn value_or_throw(self) -> core::result::Result<T, Error> {
        self.inner.map_err(raise)
    }

    /// Error: raises the stored error. Success: hands the container back.
    pub fn throw_if_error(self) -> core::result::Result<Self, Error> {
        match self.inner {
            Err(error) => Err(raise(error)),
            ok => Ok(Result { inner: ok }),
        }
    }

    /// Raises the stored error iff its runtime type is exactly `X`.
    /// Otherwise, including on error of any other type, hands the
    /// container back unchanged.
    pub fn throw_if_type<X>(self) -> core::result::Result<Self, Error>
    where
        X: core::error::Error + 'static,
    {
        match self.inner {
            Err(error) if error.is::<X>() => Err(raise(error)),
            inner => {
                if inner.is_err() {
                    trace!("stored error is not {}", core::any::type_name::<X>());
                }
                Ok(Result { inner })
            }
        }
    }
}

impl<T, E> TypedResult<T, E>
where
    E: core::error::Error,
{
    /// The value, or the stored error raised.
    pub fn value_or_throw(self) -> core::result::Result<T, E> {
        self.inner.map_err(|error| {
            debug!("raising {}", core::any::type_name::<E>());
            error
        })
    }

    /// Error: raises the stored error. Success: hands the container back.
    pub fn throw_if_error(self) -> core::result::Result<Self, E> {
        match self.inner {
            Err(error) => {
                debug!("raising {}", core::any::type_name::<E>());
                Err(error)
            }
            ok => Ok(TypedResult { inner: ok }),
        }
    }

    /// Raises the stored error iff `E` is exactly `X`. Since `E` is
    /// static here, this is decided by the types alone.
    pub fn throw_if_type<X>(self) -> core::result::Result<Self, E>
    where
        E: 'static,
        X: core::error::Error + 'static,
    {
        if TypeId::of::<E>() == TypeId::of::<X>() {
            self.throw_if_error()
        } else {
            Ok(self)
        }
    }
}
