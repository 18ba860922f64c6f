//! The owned switch-once combinator and its closure forms.

use std::fmt;

use super::Stage;

/// Calls `first` on the first call and `second` on every call after it.
///
/// `OnceAndAfter<F, G>` owns both functions and a [`Stage`] that starts at
/// [`Stage::AwaitingFirst`]. Each call runs the function selected by the
/// stage, then sets the stage to [`Stage::Switched`] and returns the result.
/// The stage is set after every call that returns, not only the first one.
///
/// # Type Parameters
///
/// * `F` - The function run by the first call
/// * `G` - The function run by every later call
///
/// Both functions must accept the same argument type and return the same
/// type. Functions of several arguments take a tuple, or use
/// [`once_and_after2`].
///
/// # Panics
///
/// Panics raised by `first` or `second` propagate unchanged. If `first`
/// panics, the stage is not updated and the next call runs `first` again.
///
/// # Thread Safety
///
/// Calling needs `&mut self`. For a combinator shared between threads use
/// `SyncOnceAndAfter` (feature `sync`).
///
/// # Examples
///
/// ```
/// use hofkit::switch::OnceAndAfter;
///
/// let mut greeting = OnceAndAfter::new(
///     |name: &str| format!("Nice to meet you, {name}"),
///     |name: &str| format!("Welcome back, {name}"),
/// );
///
/// assert_eq!(greeting.call("Ada"), "Nice to meet you, Ada");
/// assert_eq!(greeting.call("Ada"), "Welcome back, Ada");
/// assert!(greeting.is_switched());
/// ```
pub struct OnceAndAfter<F, G> {
    first: F,
    second: G,
    stage: Stage,
}

impl<F, G> OnceAndAfter<F, G> {
    /// Creates a combinator that has not been called yet.
    ///
    /// Nothing is checked beyond the signatures; `first` and `second` may be
    /// the same function, in which case the combinator behaves like a plain
    /// call.
    #[inline]
    pub const fn new(first: F, second: G) -> Self {
        Self {
            first,
            second,
            stage: Stage::AwaitingFirst,
        }
    }

    /// Invokes the function selected by the current stage.
    ///
    /// # Examples
    ///
    /// ```
    /// use hofkit::switch::OnceAndAfter;
    ///
    /// let mut counter = OnceAndAfter::new(|step: u32| step * 100, |step: u32| step);
    /// assert_eq!(counter.call(2), 200);
    /// assert_eq!(counter.call(2), 2);
    /// assert_eq!(counter.call(3), 3);
    /// ```
    pub fn call<A, R>(&mut self, argument: A) -> R
    where
        F: FnMut(A) -> R,
        G: FnMut(A) -> R,
    {
        let result = self.dispatch(argument);
        self.stage.advance();
        result
    }

    /// Invokes the selected fallible function, switching only on `Ok`.
    ///
    /// An `Err` from `first` is returned as is and leaves the combinator in
    /// [`Stage::AwaitingFirst`], so the next call retries `first`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the selected function returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use hofkit::switch::{OnceAndAfter, Stage};
    ///
    /// let mut connect = OnceAndAfter::new(
    ///     |attempt: u32| if attempt < 2 { Err("refused") } else { Ok("handshake") },
    ///     |_attempt: u32| Ok("reuse"),
    /// );
    ///
    /// assert_eq!(connect.try_call(1), Err("refused"));
    /// assert_eq!(connect.stage(), Stage::AwaitingFirst);
    /// assert_eq!(connect.try_call(2), Ok("handshake"));
    /// assert_eq!(connect.try_call(3), Ok("reuse"));
    /// ```
    pub fn try_call<A, T, E>(&mut self, argument: A) -> Result<T, E>
    where
        F: FnMut(A) -> Result<T, E>,
        G: FnMut(A) -> Result<T, E>,
    {
        let value = self.dispatch(argument)?;
        self.stage.advance();
        Ok(value)
    }

    /// Returns the current stage.
    #[inline]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns `true` once a call has returned.
    #[inline]
    pub const fn is_switched(&self) -> bool {
        self.stage.is_switched()
    }

    /// Consumes the combinator and returns `(first, second)`.
    #[inline]
    pub fn into_parts(self) -> (F, G) {
        (self.first, self.second)
    }

    fn dispatch<A, R>(&mut self, argument: A) -> R
    where
        F: FnMut(A) -> R,
        G: FnMut(A) -> R,
    {
        match self.stage {
            Stage::AwaitingFirst => (self.first)(argument),
            Stage::Switched => (self.second)(argument),
        }
    }
}

impl<F, G> fmt::Debug for OnceAndAfter<F, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OnceAndAfter")
            .field("stage", &self.stage)
            .finish_non_exhaustive()
    }
}

/// Returns a function that runs `first` once and `second` afterwards.
///
/// The returned closure owns an [`OnceAndAfter`]; see its documentation
/// for the exact stage semantics.
///
/// # Examples
///
/// ```
/// use hofkit::switch::once_and_after;
///
/// let mut make_sound = once_and_after(
///     |subject: &str| format!("{subject}-squeak"),
///     |subject: &str| format!("{subject}-creak"),
/// );
///
/// let sounds: Vec<String> = (0..4).map(|_| make_sound("door")).collect();
/// assert_eq!(sounds, ["door-squeak", "door-creak", "door-creak", "door-creak"]);
/// ```
#[inline]
pub fn once_and_after<A, R, F, G>(first: F, second: G) -> impl FnMut(A) -> R
where
    F: FnMut(A) -> R,
    G: FnMut(A) -> R,
{
    let mut combinator = OnceAndAfter::new(first, second);
    move |argument| combinator.call(argument)
}

/// Binary version of [`once_and_after`].
///
/// # Examples
///
/// ```
/// use hofkit::switch::once_and_after2;
///
/// let mut combine = once_and_after2(|left: i32, right: i32| left * right, |left: i32, right: i32| left + right);
///
/// assert_eq!(combine(3, 4), 12);
/// assert_eq!(combine(3, 4), 7);
/// ```
#[inline]
pub fn once_and_after2<A, B, R, F, G>(mut first: F, mut second: G) -> impl FnMut(A, B) -> R
where
    F: FnMut(A, B) -> R,
    G: FnMut(A, B) -> R,
{
    let mut combinator = OnceAndAfter::new(
        move |(left, right): (A, B)| first(left, right),
        move |(left, right): (A, B)| second(left, right),
    );
    move |left, right| combinator.call((left, right))
}

/// Flag-based variant of [`once_and_after`].
///
/// The flag is raised *before* `first` runs. Unlike [`once_and_after`], a
/// panic inside `first` still counts as the first call, so the next call
/// runs `second`.
///
/// # Examples
///
/// ```
/// use hofkit::switch::once_and_after_flag;
///
/// let mut label = once_and_after_flag(|index: usize| format!("head {index}"), |index: usize| format!("tail {index}"));
///
/// assert_eq!(label(0), "head 0");
/// assert_eq!(label(1), "tail 1");
/// ```
#[inline]
pub fn once_and_after_flag<A, R, F, G>(mut first: F, mut second: G) -> impl FnMut(A) -> R
where
    F: FnMut(A) -> R,
    G: FnMut(A) -> R,
{
    let mut done = false;
    move |argument| {
        if done {
            second(argument)
        } else {
            done = true;
            first(argument)
        }
    }
}

/// Returns a function that runs fallible `first` until it succeeds, then `second`.
///
/// Closure form of [`OnceAndAfter::try_call`]. Errors are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use hofkit::switch::try_once_and_after;
///
/// let mut parse = try_once_and_after(
///     |text: &str| text.parse::<i32>().map(|value| value * 10),
///     |text: &str| text.parse::<i32>(),
/// );
///
/// assert!(parse("x").is_err());
/// assert_eq!(parse("4"), Ok(40));
/// assert_eq!(parse("4"), Ok(4));
/// ```
#[inline]
pub fn try_once_and_after<A, T, E, F, G>(first: F, second: G) -> impl FnMut(A) -> Result<T, E>
where
    F: FnMut(A) -> Result<T, E>,
    G: FnMut(A) -> Result<T, E>,
{
    let mut combinator = OnceAndAfter::new(first, second);
    move |argument| combinator.try_call(argument)
}
