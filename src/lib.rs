//! # hofkit
//!
//! Small higher-order function combinators for Rust.
//!
//! ## Overview
//!
//! Each combinator takes one or two functions and returns a new function
//! built from them:
//!
//! - **Switch**: call one function the first time, another one ever after
//!   ([`once_and_after`](switch::once_and_after), [`OnceAndAfter`](switch::OnceAndAfter))
//! - **Predicate**: negate the result of a predicate ([`negate`](predicate::negate))
//! - **Comparator**: flip the sign of a comparator to reverse an ordering
//!   ([`invert`](comparator::invert))
//!
//! ## Feature Flags
//!
//! - `switch`: Switch-once combinators
//! - `predicate`: Predicate negation
//! - `comparator`: Comparator inversion
//! - `sync`: Mutex-guarded switch combinator that can be shared between threads
//! - `trace`: Emit a `tracing` event when a switch combinator changes stage
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use hofkit::prelude::*;
//!
//! let mut make_sound = once_and_after(
//!     |subject: &str| format!("{subject} squeak!!"),
//!     |subject: &str| format!("{subject} creak!!"),
//! );
//! assert_eq!(make_sound("door"), "door squeak!!");
//! assert_eq!(make_sound("door"), "door creak!!");
//!
//! let is_not_positive = negate(|value: i32| value > 0);
//! assert!(is_not_positive(-5));
//!
//! let descending = invert(|left: i32, right: i32| left - right);
//! assert_eq!(descending(3, 5), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled combinator.
///
/// # Usage
///
/// ```rust
/// use hofkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "switch")]
    pub use crate::switch::*;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "comparator")]
    pub use crate::comparator::*;
}

#[cfg(feature = "switch")]
pub mod switch;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "comparator")]
pub mod comparator;
