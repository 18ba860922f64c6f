//! Switch-once combinators.
//!
//! A switch-once combinator wraps two functions with the same signature.
//! The first call on the combinator runs the first function; every later
//! call runs the second one. The switch is permanent: there is no way to
//! go back to the first function.
//!
//! # Overview
//!
//! - [`OnceAndAfter`]: Owned combinator with an inspectable [`Stage`]
//! - [`once_and_after`]: Closure form for unary functions
//! - [`once_and_after2`]: Closure form for binary functions
//! - [`once_and_after_flag`]: Closure form that flips its flag *before* the first call
//! - [`try_once_and_after`]: Closure form that only switches after an `Ok`
//! - `SyncOnceAndAfter`: Mutex-guarded combinator for shared use (feature `sync`)
//!
//! # Stages
//!
//! ```text
//! AwaitingFirst --(call returns)--> Switched --(call returns)--> Switched
//! ```
//!
//! `Switched` is absorbing. A call that unwinds out of the first function
//! never reaches the transition, so the combinator stays in
//! `AwaitingFirst` and the next call runs the first function again.
//!
//! # Examples
//!
//! ```
//! use hofkit::switch::once_and_after;
//!
//! let mut make_sound = once_and_after(
//!     |subject: &str| format!("{subject}-squeak"),
//!     |subject: &str| format!("{subject}-creak"),
//! );
//!
//! assert_eq!(make_sound("door"), "door-squeak");
//! assert_eq!(make_sound("door"), "door-creak");
//! assert_eq!(make_sound("door"), "door-creak");
//! ```
//!
//! # Thread Safety
//!
//! [`OnceAndAfter`] and the closures returned here need `&mut` access to
//! call, so the borrow checker already rules out unsynchronised shared
//! use. Enable the `sync` feature for `SyncOnceAndAfter`, which takes
//! `&self` and serialises calls behind a mutex.

mod once_and_after;
mod stage;
#[cfg(feature = "sync")]
mod sync_once_and_after;

pub use once_and_after::{
    OnceAndAfter, once_and_after, once_and_after_flag, once_and_after2, try_once_and_after,
};
pub use stage::Stage;
#[cfg(feature = "sync")]
pub use sync_once_and_after::{SyncOnceAndAfter, sync_once_and_after};
