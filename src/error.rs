//! The error types of this crate.
//!
//! [`InvalidState`] is what accessors return when asked for the slot that
//! is not live. It signals a programming error on the caller's side and is
//! never the domain error itself.
//!
//! [`Error`] is the generic error object carried by [`UnitResult`][crate::UnitResult]
//! and [`Result`][crate::Result]: any `core::error::Error`, type-erased and shared.

use alloc::{
    boxed::Box,
    string::{String, ToString},
    sync::Arc,
};
use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
};

use crate::messages;

/// The erased form every generic error is stored as.
pub type DynError = dyn core::error::Error + Send + Sync + 'static;

/// A container was read in the state it is not in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidState {
    /// The value was requested from an error container.
    NoValue,
    /// The error was requested from a success container.
    NoError,
}

impl InvalidState {
    pub const fn message(&self) -> &'static str {
        match self {
            InvalidState::NoValue => messages::NO_VALUE,
            InvalidState::NoError => messages::NO_ERROR,
        }
    }
}

impl fmt::Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for InvalidState {}

/// An error consisting of nothing but its message.
///
/// This is what [`Error::msg`] wraps, and what typed errors turn into
/// when they are rendered into a generic [`Error`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Message(pub(crate) String);

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Message(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::error::Error for Message {}

/// Generic error object: an owned, type-erased, shareable error.
///
/// Cloning hands out another handle to the *same* error object, and
/// equality is identity: two `Error`s are equal iff they are handles to
/// the same object. Wrapping the same underlying error twice yields two
/// distinct objects.
///
/// `Error` does not itself implement `core::error::Error`, otherwise the
/// blanket `From<E: core::error::Error>` would overlap with `From<Error>`.
/// Use [`as_error`][Error::as_error] (or deref) to reach the trait object.
#[derive(Clone)]
pub struct Error {
    inner: Arc<DynError>,
    type_name: &'static str,
}

impl Error {
    /// Wrap a concrete error.
    pub fn new<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        let inner: Arc<DynError> = Arc::new(error);
        Error { inner, type_name: core::any::type_name::<E>() }
    }

    /// Wrap a plain message, as a [`Message`].
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message::new(message))
    }

    /// Adopt an already boxed error. The runtime type tag is preserved,
    /// the static type name is not known anymore.
    pub fn from_boxed(error: Box<DynError>) -> Self {
        Error { inner: Arc::from(error), type_name: core::any::type_name::<DynError>() }
    }

    /// Human-readable message, the `Display` rendering of the wrapped error.
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    /// Name of the concrete type this error was created from. For errors
    /// adopted with [`from_boxed`][Self::from_boxed] this names the trait
    /// object instead.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Exact runtime type test. Subtypes in the sense of wrapper types
    /// or `source()` chains do not match.
    pub fn is<E: core::error::Error + 'static>(&self) -> bool {
        self.inner.is::<E>()
    }

    pub fn downcast_ref<E: core::error::Error + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }

    pub fn as_error(&self) -> &DynError {
        &*self.inner
    }

    /// Identity comparison, ignoring vtables.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.addr(), other.addr())
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.inner) as *const ()
    }

    /// Writes `Result(<message>)`, or `Result(<debug form>)` if the message is blank.
    pub(crate) fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message();
        if message.trim().is_empty() {
            write!(f, "Result({:?})", self.inner)
        } else {
            write!(f, "Result({})", message)
        }
    }
}

impl<E> From<E> for Error
where
    E: core::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Error::new(error)
    }
}

impl Deref for Error {
    type Target = DynError;
    fn deref(&self) -> &Self::Target {
        self.as_error()
    }
}

impl AsRef<DynError> for Error {
    fn as_ref(&self) -> &DynError {
        self.as_error()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Error {}

impl Hash for Error {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state)
    }
}
