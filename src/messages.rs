//! Fixed messages for operations attempted against a container in the wrong state.

/// Reading the value of an error container.
pub const NO_VALUE: &str = "The result is an error and holds no value";

/// Reading the error of a success container.
pub const NO_ERROR: &str = "The result is a success and holds no error";

/// Rendered in place of a payload by a successful unit container.
pub const OK: &str = "Ok";
