//! `TypedResult<T, E>`: a value, or an error of a caller-chosen type.

use core::fmt;

use ref_cast::RefCast;

use crate::InvalidState;

/// A value of type `T`, or an error of type `E`.
///
/// `E` need not be an error type at all, enums and strings are fine.
/// The variant tag is the discriminant, so absence of an error never has
/// to be encoded in `E` itself.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, RefCast)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct TypedResult<T, E> {
    pub(crate) inner: core::result::Result<T, E>,
}

impl<T, E> TypedResult<T, E> {
    pub const fn ok(value: T) -> Self {
        TypedResult { inner: Ok(value) }
    }

    pub const fn error(error: E) -> Self {
        TypedResult { inner: Err(error) }
    }

    /// Borrow a `core::result::Result` as a container, without moving it.
    pub fn from_std_ref(result: &core::result::Result<T, E>) -> &Self {
        Self::ref_cast(result)
    }

    pub fn as_std(&self) -> &core::result::Result<T, E> {
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
        self.inner.as_ref().map_err(|_| {
            warn!("{}", crate::messages::NO_VALUE);
            InvalidState::NoValue
        })
    }

    /// The owned counterpart of [`value`][Self::value].
    pub fn into_value(self) -> core::result::Result<T, InvalidState> {
        self.inner.map_err(|_| {
            warn!("{}", crate::messages::NO_VALUE);
            InvalidState::NoValue
        })
    }

    /// Fails with [`InvalidState::NoError`] on success.
    pub fn get_error(&self) -> core::result::Result<&E, InvalidState> {
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

    pub fn try_get_error(&self) -> Option<&E> {
        self.inner.as_ref().err()
    }

    pub fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(&self.inner, Ok(v) if v == value)
    }

    pub fn contains_error(&self, error: &E) -> bool
    where
        E: PartialEq,
    {
        matches!(&self.inner, Err(e) if e == error)
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for TypedResult<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => write!(f, "Result({})", value),
            Err(error) => write!(f, "Result({})", error),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn get_error() {
        let result = TypedResult::<i32, Failed>::error(Failed::new("Invalid date"));
        assert_eq!(result.get_error().unwrap().to_string(), "Invalid date");
        assert_eq!(result.value(), Err(InvalidState::NoValue));
    }

    #[test]
    fn try_get_value() {
        let result = TypedResult::<i32, Failed>::ok(10);
        assert_eq!(result.try_get_value(), Some(&10));
        assert!(result.is_success());
        assert_eq!(result.get_error(), Err(InvalidState::NoError));
    }

    #[test]
    fn try_get_error() {
        let result = TypedResult::<i32, Failed>::error(Failed::new("Invalid date"));
        assert_eq!(result.try_get_error(), Some(&Failed::new("Invalid date")));
        assert_eq!(result.try_get_value(), None);
        assert!(result.is_error());
        assert_eq!(result.into_value(), Err(InvalidState::NoValue));
    }

    #[test]
    fn enum_errors() {
        let result = TypedResult::<i32, Code>::error(Code::NotFound);
        assert!(result.is_error());
        assert_eq!(result.get_error(), Ok(&Code::NotFound));

        // an error slot equal to the "zero" of E is still an error
        let result = TypedResult::<i32, i32>::error(0);
        assert!(result.is_error());
        assert_eq!(result.try_get_error(), Some(&0));
    }

    #[test]
    fn contains_value() {
        let result = TypedResult::<i32, Failed>::ok(10);
        assert!(result.contains_value(&10));
        assert!(!result.contains_value(&1));
        assert!(!result.contains_value(&5));

        let result = TypedResult::<i32, Failed>::error(Failed::new("Invalid date"));
        assert!(!result.contains_value(&10));
    }

    #[test]
    fn contains_error() {
        let result = TypedResult::<i32, &str>::error("Invalid data");
        assert!(result.contains_error(&"Invalid data"));
        assert!(!result.contains_error(&"Invalid"));
        assert!(!result.contains_value(&10));
    }

    #[test]
    fn to_string() {
        let result = TypedResult::<i32, &str>::error("Invalid data");
        assert_eq!(result.to_string(), "Result(Invalid data)");
        let result = TypedResult::<i32, &str>::ok(10);
        assert_eq!(result.to_string(), "Result(10)");
    }

    #[test]
    fn equality() {
        assert_eq!(TypedResult::<i32, Code>::ok(10), TypedResult::ok(10));
        assert_eq!(TypedResult::<i32, Code>::error(Code::NotFound), TypedResult::error(Code::NotFound));
        assert_ne!(TypedResult::<i32, Code>::error(Code::NotFound), TypedResult::error(Code::Denied));
        assert_ne!(TypedResult::<i32, i32>::ok(0), TypedResult::error(0));
    }

    #[test]
    fn hash() {
        assert_eq!(hash_of(&TypedResult::<i32, Code>::ok(1)), hash_of(&TypedResult::<i32, Code>::ok(1)));
        assert_eq!(
            hash_of(&TypedResult::<i32, Code>::error(Code::Denied)),
            hash_of(&TypedResult::<i32, Code>::error(Code::Denied)),
        );
    }

    #[test]
    fn borrowed_view() {
        let std: core::result::Result<i32, Code> = Err(Code::Denied);
        let view = TypedResult::from_std_ref(&std);
        assert!(view.contains_error(&Code::Denied));
        assert!(core::ptr::eq(view.as_std(), &std));
    }
}
