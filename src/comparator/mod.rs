//! Comparator inversion.
//!
//! A comparator returns a signed value: negative when the first argument
//! sorts before the second, zero when they are equal and positive
//! otherwise. [`invert`] flips that sign, which reverses the order a sort
//! produces:
//!
//! ```text
//! invert(c)(a, b) = -c(a, b)
//! ```
//!
//! This is plain arithmetic negation, not a `{-1, 0, 1}` normalisation.
//! For floats a zero result becomes `-0.0`, which still compares equal to
//! `0.0`. For signed integers the usual overflow rules apply: negating
//! `i32::MIN` overflows.
//!
//! [`invert_ordering`] is the same combinator for comparators that return
//! [`Ordering`], the form expected by [`slice::sort_by`].
//!
//! # Laws
//!
//! - **Definition**: `invert(c)(a, b) == -c(a, b)`
//! - **Double inversion**: `invert(invert(c))(a, b) == c(a, b)` whenever
//!   `-c(a, b)` does not overflow
//!
//! # Examples
//!
//! ```
//! use hofkit::comparator::{invert, invert_ordering};
//!
//! let descending = invert(|left: i32, right: i32| left - right);
//! assert_eq!(descending(3, 5), 2);
//!
//! let mut words = vec!["pear", "apple", "fig"];
//! words.sort_by(invert_ordering(|left: &&str, right: &&str| left.cmp(right)));
//! assert_eq!(words, ["pear", "fig", "apple"]);
//! ```

use std::cmp::Ordering;
use std::ops::Neg;

/// Returns a comparator whose result is the negation of `comparator`'s.
///
/// # Examples
///
/// ```
/// use hofkit::comparator::invert;
///
/// let by_distance = |left: f64, right: f64| left - right;
/// let reversed = invert(by_distance);
///
/// assert_eq!(reversed(1.5, 4.0), 2.5);
/// assert!(reversed(2.0, 2.0) == 0.0);
/// ```
#[inline]
pub fn invert<A, B, N, C>(comparator: C) -> impl Fn(A, B) -> N
where
    C: Fn(A, B) -> N,
    N: Neg<Output = N>,
{
    move |left, right| -comparator(left, right)
}

/// Returns an [`Ordering`] comparator that orders in reverse.
///
/// # Examples
///
/// ```
/// use hofkit::comparator::invert_ordering;
///
/// let mut scores = vec![3, 9, 1, 7];
/// scores.sort_by(invert_ordering(|left: &i32, right: &i32| left.cmp(right)));
/// assert_eq!(scores, vec![9, 7, 3, 1]);
/// ```
#[inline]
pub fn invert_ordering<A, C>(comparator: C) -> impl Fn(&A, &A) -> Ordering
where
    A: ?Sized,
    C: Fn(&A, &A) -> Ordering,
{
    move |left, right| comparator(left, right).reverse()
}
