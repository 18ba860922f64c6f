//! Mutex-guarded switch-once combinator.
//!
//! [`SyncOnceAndAfter`] wraps an [`OnceAndAfter`] in a
//! [`parking_lot::Mutex`]. The lock is held for the whole
//! read-call-write sequence, so among any number of concurrent callers
//! exactly one runs the first function.
//!
//! `parking_lot` locks are not poisoned: if the first function panics the
//! lock is released, the stage stays at [`Stage::AwaitingFirst`] and the
//! combinator remains usable.
//!
//! # Examples
//!
//! ```rust
//! use hofkit::switch::SyncOnceAndAfter;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let combinator = Arc::new(SyncOnceAndAfter::new(|_: usize| "leader", |_: usize| "follower"));
//!
//! let handles: Vec<_> = (0..8).map(|index| {
//!     let combinator = Arc::clone(&combinator);
//!     thread::spawn(move || combinator.call(index))
//! }).collect();
//!
//! let roles: Vec<_> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
//! assert_eq!(roles.iter().filter(|role| **role == "leader").count(), 1);
//! ```

use std::fmt;

use parking_lot::Mutex;

use super::{OnceAndAfter, Stage};

/// Thread-safe version of [`OnceAndAfter`].
///
/// Calls take `&self` and are serialised; the wrapped functions never run
/// concurrently with each other.
///
/// # Thread Safety
///
/// `SyncOnceAndAfter<F, G>` is `Send` and `Sync` when `F: Send` and
/// `G: Send`.
pub struct SyncOnceAndAfter<F, G> {
    inner: Mutex<OnceAndAfter<F, G>>,
}

impl<F, G> SyncOnceAndAfter<F, G> {
    /// Creates a combinator that has not been called yet.
    #[inline]
    pub fn new(first: F, second: G) -> Self {
        Self {
            inner: Mutex::new(OnceAndAfter::new(first, second)),
        }
    }

    /// Invokes the function selected by the current stage under the lock.
    ///
    /// Calling this again from inside `first` or `second` on the same
    /// combinator deadlocks.
    pub fn call<A, R>(&self, argument: A) -> R
    where
        F: FnMut(A) -> R,
        G: FnMut(A) -> R,
    {
        self.inner.lock().call(argument)
    }

    /// Fallible call under the lock; switches only on `Ok`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the selected function returns.
    pub fn try_call<A, T, E>(&self, argument: A) -> Result<T, E>
    where
        F: FnMut(A) -> Result<T, E>,
        G: FnMut(A) -> Result<T, E>,
    {
        self.inner.lock().try_call(argument)
    }

    /// Returns the current stage.
    ///
    /// Blocks while another thread is inside a call.
    pub fn stage(&self) -> Stage {
        self.inner.lock().stage()
    }

    /// Returns `true` once a call has returned.
    pub fn is_switched(&self) -> bool {
        self.stage().is_switched()
    }

    /// Consumes the wrapper and returns the unsynchronised combinator.
    #[inline]
    pub fn into_inner(self) -> OnceAndAfter<F, G> {
        self.inner.into_inner()
    }
}

impl<F, G> fmt::Debug for SyncOnceAndAfter<F, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("SyncOnceAndAfter");
        match self.inner.try_lock() {
            Some(guard) => debug.field("stage", &guard.stage()),
            None => debug.field("stage", &format_args!("<locked>")),
        };
        debug.finish_non_exhaustive()
    }
}

/// Returns a shareable function that runs `first` once and `second` afterwards.
///
/// The returned closure is `Fn`, so it can be called through a shared
/// reference or an `Arc` from several threads.
///
/// # Examples
///
/// ```rust
/// use hofkit::switch::sync_once_and_after;
///
/// let announce = sync_once_and_after(|value: u8| value * 2, |value: u8| value);
/// assert_eq!(announce(21), 42);
/// assert_eq!(announce(21), 21);
/// ```
#[inline]
pub fn sync_once_and_after<A, R, F, G>(first: F, second: G) -> impl Fn(A) -> R + Send + Sync
where
    F: FnMut(A) -> R + Send,
    G: FnMut(A) -> R + Send,
{
    let combinator = SyncOnceAndAfter::new(first, second);
    move |argument| combinator.call(argument)
}
