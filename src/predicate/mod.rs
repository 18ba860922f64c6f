//! Predicate negation.
//!
//! [`negate`] takes a predicate and returns a predicate with the opposite
//! answer for every input:
//!
//! ```text
//! negate(p)(x) = !p(x)
//! ```
//!
//! The wrappers hold no state. They are referentially transparent whenever
//! the wrapped predicate is, and panics from the predicate propagate
//! unchanged.
//!
//! # Laws
//!
//! - **Definition**: `negate(p)(x) == !p(x)`
//! - **Double negation**: `negate(negate(p))(x) == p(x)`
//!
//! # Examples
//!
//! ```
//! use hofkit::predicate::{negate, negate_ref};
//!
//! let is_not_positive = negate(|value: i32| value > 0);
//! assert!(!is_not_positive(5));
//! assert!(is_not_positive(-5));
//!
//! let blanks: Vec<&str> = vec!["a", "", "b", ""]
//!     .into_iter()
//!     .filter(negate_ref(|line: &&str| !line.is_empty()))
//!     .collect();
//! assert_eq!(blanks, ["", ""]);
//! ```

/// Returns a predicate that answers the opposite of `predicate`.
///
/// # Examples
///
/// ```
/// use hofkit::predicate::negate;
///
/// let is_odd = negate(|value: u32| value % 2 == 0);
/// assert!(is_odd(3));
/// assert!(!is_odd(4));
/// ```
#[inline]
pub fn negate<A, P>(predicate: P) -> impl Fn(A) -> bool
where
    P: Fn(A) -> bool,
{
    move |argument| !predicate(argument)
}

/// Binary version of [`negate`].
///
/// # Examples
///
/// ```
/// use hofkit::predicate::negate2;
///
/// let differ = negate2(|left: &str, right: &str| left.eq_ignore_ascii_case(right));
/// assert!(!differ("Rust", "rust"));
/// assert!(differ("Rust", "Go"));
/// ```
#[inline]
pub fn negate2<A, B, P>(predicate: P) -> impl Fn(A, B) -> bool
where
    P: Fn(A, B) -> bool,
{
    move |left, right| !predicate(left, right)
}

/// By-reference version of [`negate`] that accepts any borrow lifetime.
///
/// [`Iterator::filter`] and similar adaptors hand out `&Item` with a fresh
/// lifetime on each call; this form satisfies that bound.
///
/// # Examples
///
/// ```
/// use hofkit::predicate::negate_ref;
///
/// let kept: Vec<i32> = vec![-2, 7, 0, 3]
///     .into_iter()
///     .filter(negate_ref(|value: &i32| *value > 0))
///     .collect();
/// assert_eq!(kept, vec![-2, 0]);
/// ```
#[inline]
pub fn negate_ref<A, P>(predicate: P) -> impl Fn(&A) -> bool
where
    A: ?Sized,
    P: Fn(&A) -> bool,
{
    move |argument| !predicate(argument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate_with_unit_input() {
        let never = negate(|()| true);
        assert!(!never(()));
    }

    #[test]
    fn test_negate_ref_with_unsized_input() {
        let is_not_empty = negate_ref(str::is_empty);
        assert!(is_not_empty("text"));
        assert!(!is_not_empty(""));
    }
}
