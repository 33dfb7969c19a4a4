/// The success/error discriminant shared by all containers of this crate.
///
/// Exactly one of `is_success` and `is_error` holds, fixed at construction.
/// Sealed, the three containers are all there is.
pub trait Outcome: sealed::Outcome {
    fn is_success(&self) -> bool;

    fn is_error(&self) -> bool {
        !self.is_success()
    }
}

/// cf. https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod sealed {
    pub trait Outcome {}
    impl Outcome for crate::UnitResult {}
    impl<T> Outcome for crate::Result<T> {}
    impl<T, E> Outcome for crate::TypedResult<T, E> {}
}

impl Outcome for crate::UnitResult {
    fn is_success(&self) -> bool {
        crate::UnitResult::is_success(self)
    }
}

impl<T> Outcome for crate::Result<T> {
    fn is_success(&self) -> bool {
        crate::Result::is_success(self)
    }
}

impl<T, E> Outcome for crate::TypedResult<T, E> {
    fn is_success(&self) -> bool {
        crate::TypedResult::is_success(self)
    }
}
