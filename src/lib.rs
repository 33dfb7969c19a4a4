#![cfg_attr(not(test), no_std)]
//! Value-or-error containers, as an alternative to propagating errors
//! by unwinding.
//!
//! There are three shapes:
//!
//! - [`UnitResult`]: success, or a generic [`Error`]
//! - [`Result<T>`]: a `T`, or a generic [`Error`]
//! - [`TypedResult<T, E>`]: a `T`, or an `E` of the caller's choosing
//!
//! All three are immutable once built. They narrow into one another
//! ([`convert`]), and share a library of [`combinators`].
//!
//! ```
//! use extra_result::{Result, TypedResult};
//!
//! let parsed = TypedResult::<i32, &str>::error("Invalid");
//! let narrowed: Result<i32> = parsed.to_result_lossy();
//! assert_eq!(narrowed.to_string(), "Result(Invalid)");
//! assert_eq!(narrowed.value_or(22), 22);
//! ```

extern crate alloc;

delog::generate_macros!();

pub mod combinators;
pub mod convert;
mod error;
pub use error::{DynError, Error, InvalidState, Message};
pub mod messages;
mod outcome;
pub use outcome::Outcome;
mod result;
pub use result::Result;
mod trait_implementations;
mod typed;
pub use typed::TypedResult;
mod unit;
pub use unit::UnitResult;
