//! Combinators over the three containers.
//!
//! All of them are stateless: they either consume a container and build a
//! new one (or a plain value), or borrow it to run a side effect. Callbacks
//! run inline, at most once, and only the branch matching the discriminant
//! ever runs.
//!
//! - [`map`]: `map`, `map_error`
//! - [`branch`]: `match_with`, `fold`, `match_inspect`
//! - [`inspect`]: `on_success`, `on_error`, `match_ok`, `match_error`
//! - [`extract`]: `value_or_default`, `value_or`, `value_or_none`
//! - [`raise`]: `value_or_throw`, `throw_if_error`, `throw_if_type`
//!
//! "Raising" means handing the stored error back as the `Err` of a
//! `core::result::Result`, for the caller to propagate with `?`.

pub mod branch;
pub mod extract;
pub mod inspect;
pub mod map;
pub mod raise;
