//! Dispatch stage of a switch-once combinator.

/// Which of the two wrapped functions the next call will run.
///
/// # Examples
///
/// ```
/// use hofkit::switch::{OnceAndAfter, Stage};
///
/// let mut combinator = OnceAndAfter::new(|value: i32| value, |value: i32| -value);
/// assert_eq!(combinator.stage(), Stage::AwaitingFirst);
///
/// combinator.call(1);
/// assert_eq!(combinator.stage(), Stage::Switched);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    /// No call has returned yet; the next call runs the first function.
    #[default]
    AwaitingFirst,
    /// At least one call has returned; every call runs the second function.
    Switched,
}

impl Stage {
    /// Returns `true` once the combinator has switched to the second function.
    #[inline]
    pub const fn is_switched(self) -> bool {
        matches!(self, Self::Switched)
    }

    /// Moves to `Switched`.
    ///
    /// The assignment is unconditional; advancing an already switched
    /// stage leaves it unchanged.
    #[inline]
    pub(crate) fn advance(&mut self) {
        let previous = std::mem::replace(self, Self::Switched);
        record_transition(previous);
    }
}

#[cfg(feature = "trace")]
fn record_transition(previous: Stage) {
    if previous == Stage::AwaitingFirst {
        tracing::trace!(target: "hofkit::switch", "first call returned, switching to second function");
    }
}

#[cfg(not(feature = "trace"))]
#[inline]
const fn record_transition(_previous: Stage) {}
