//! Two-way branching on the discriminant. Exactly one branch runs.

use crate::{Error, Result, TypedResult, UnitResult};

impl UnitResult {
    /// Runs `ok` or `error`, and returns what the branch produced.
    pub fn match_with<R, O, F>(self, ok: O, error: F) -> R
    where
        O: FnOnce() -> R,
        F: FnOnce(Error) -> R,
    {
        match self.error {
            None => ok(),
            Some(e) => error(e),
        }
    }

    /// Same as [`match_with`][Self::match_with].
    pub fn fold<R, O, F>(self, ok: O, error: F) -> R
    where
        O: FnOnce() -> R,
        F: FnOnce(Error) -> R,
    {
        self.match_with(ok, error)
    }

    /// Side-effect form of [`match_with`][Self::match_with], borrowing.
    pub fn match_inspect<O, F>(&self, ok: O, error: F)
    where
        O: FnOnce(),
        F: FnOnce(&Error),
    {
        match &self.error {
            None => ok(),
            Some(e) => error(e),
        }
    }
}

impl<T> Result<T> {
    /// Runs `ok` or `error`, and returns what the branch produced.
    pub fn match_with<R, O, F>(self, ok: O, error: F) -> R
    where
        O: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        match self.inner {
            Ok(value) => ok(value),
            Err(e) => error(e),
        }
    }

    /// Same as [`match_with`][Self::match_with].
    pub fn fold<R, O, F>(self, ok: O, error: F) -> R
    where
        O: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        self.match_with(ok, error)
    }

    /// Side-effect form of [`match_with`][Self::match_with], borrowing.
    pub fn match_inspect<O, F>(&self, ok: O, error: F)
    where
        O: FnOnce(&T),
        F: FnOnce(&Error),
    {
        match &self.inner {
            Ok(value) => ok(value),
            Err(e) => error(e),
        }
    }
}

impl<T, E> TypedResult<T, E> {
    /// Runs `ok` or `error`, and returns what the branch produced.
    pub fn match_with<R, O, F>(self, ok: O, error: F) -> R
    where
        O: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self.inner {
            Ok(value) => ok(value),
            Err(e) => error(e),
        }
    }

    /// Same as [`match_with`][Self::match_with].
    pub fn fold<R, O, F>(self, ok: O, error: F) -> R
    where
        O: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        self.match_with(ok, error)
    }

    /// Side-effect form of [`match_with`][Self::match_with], borrowing.
    pub fn match_inspect<O, F>(&self, ok: O, error: F)
    where
        O: FnOnce(&T),
        F: FnOnce(&E),
    {
        match &self.inner {
            Ok(value) => ok(value),
            Err(e) => error(e),
        }
    }
}
