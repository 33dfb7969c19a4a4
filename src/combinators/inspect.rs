//! One-sided side effects. The action runs iff the container is in the
//! matching state, otherwise nothing happens.

use crate::{Error, Result, TypedResult, UnitResult};

impl UnitResult {
    pub fn on_success<A: FnOnce()>(&self, action: A) {
        if self.is_success() {
            action()
        }
    }

    pub fn on_error<A: FnOnce(&Error)>(&self, action: A) {
        if let Some(error) = &self.error {
            action(error)
        }
    }

    /// Alias of [`on_success`][Self::on_success].
    pub fn match_ok<A: FnOnce()>(&self, action: A) {
        self.on_success(action)
    }

    /// Alias of [`on_error`][Self::on_error].
    pub fn match_error<A: FnOnce(&Error)>(&self, action: A) {
        self.on_error(action)
    }
}

impl<T> Result<T> {
    pub fn on_success<A: FnOnce(&T)>(&self, action: A) {
        if let Ok(value) = &self.inner {
            action(value)
        }
    }

    pub fn on_error<A: FnOnce(&Error)>(&self, action: A) {
        if let Err(error) = &self.inner {
            action(error)
        }
    }

    /// Alias of [`on_success`][Self::on_success].
    pub fn match_ok<A: FnOnce(&T)>(&self, action: A) {
        self.on_success(action)
    }

    /// Alias of [`on_error`][Self::on_error].
    pub fn match_error<A: FnOnce(&Error)>(&self, action: A) {
        self.on_error(action)
    }
}

impl<T, E> TypedResult<T, E> {
    pub fn on_success<A: FnOnce(&T)>(&self, action: A) {
        if let Ok(value) = &self.inner {
            action(value)
        }
    }

    pub fn on_error<A: FnOnce(&E)>(&self, action: A) {
        if let Err(error) = &self.inner {
            action(error)
        }
    }

    /// Alias of [`on_success`][Self::on_success].
    pub fn match_ok<A: FnOnce(&T)>(&self, action: A) {
        self.on_success(action)
    }

    /// Alias of [`on_error`][Self::on_error].
    pub fn match_error<A: FnOnce(&E)>(&self, action: A) {
        self.on_error(action)
    }
}

#[cfg(test)]
mod test {
    use core::cell::Cell;

    use crate::fixtures::*;
    use crate::{Result, TypedResult, UnitResult};

    #[test]
    fn unit() {
        let calls = Cell::new(0);
        let ok = UnitResult::ok();
        let error = UnitResult::error(Invalid);

        ok.on_success(|| calls.set(calls.get() + 1));
        ok.on_error(|_| panic!("no error"));
        ok.match_ok(|| calls.set(calls.get() + 1));
        ok.match_error(|_| panic!("no error"));

        error.on_success(|| panic!("no success"));
        error.on_error(|e| {
            assert!(e.is::<Invalid>());
            calls.set(calls.get() + 1)
        });
        error.match_ok(|| panic!("no success"));
        error.match_error(|_| calls.set(calls.get() + 1));

        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn result_on_success() {
        let counter = Cell::new(0);
        Result::ok(10).on_success(|v| {
            assert_eq!(*v, 10);
            counter.set(1)
        });
        Result::<i32>::error_msg("Invalid").on_success(|_| counter.set(2));
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn result_on_error() {
        let counter = Cell::new(0);
        Result::<i32>::error_msg("Invalid").on_error(|e| {
            assert_eq!(e.message(), "Invalid");
            counter.set(1)
        });
        Result::ok(10).on_error(|_| counter.set(2));
        Result::ok(10).match_error(|_| counter.set(3));
        Result::ok(10).match_ok(|_| counter.set(counter.get() + 10));
        assert_eq!(counter.get(), 11);
    }

    #[test]
    fn typed_on_success() {
        let counter = Cell::new(0);
        TypedResult::<i32, &str>::ok(10).on_success(|v| {
            assert_eq!(*v, 10);
            counter.set(1)
        });
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn typed_on_error() {
        let counter = Cell::new(0);
        let result = TypedResult::<i32, &str>::error("Invalid");
        result.on_error(|e| {
            assert_eq!(*e, "Invalid");
            counter.set(1)
        });
        result.on_success(|_| counter.set(2));
        result.match_ok(|_| counter.set(3));
        result.match_error(|_| counter.set(counter.get() + 10));
        assert_eq!(counter.get(), 11);
    }
}
