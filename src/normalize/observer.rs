//! Observers of machine state changes.

use std::fmt;

/// Callback for each emitted value.
pub type NextFn<T> = Box<dyn Fn(&T) + Send + Sync>;
/// Callback for an error.
pub type ErrorFn<E> = Box<dyn Fn(&E) + Send + Sync>;
/// Callback for completion.
pub type CompleteFn = Box<dyn Fn() + Send + Sync>;

/// Canonical observer with all three callbacks present.
pub struct Observer<T, E> {
    next: NextFn<T>,
    error: ErrorFn<E>,
    complete: CompleteFn,
}

impl<T, E> Observer<T, E> {
    /// Observer from three callbacks.
    pub fn new(next: NextFn<T>, error: ErrorFn<E>, complete: CompleteFn) -> Self {
        Self {
            next,
            error,
            complete,
        }
    }

    /// Deliver a value.
    pub fn next(&self, value: &T) {
        (self.next)(value)
    }

    /// Deliver an error.
    pub fn error(&self, error: &E) {
        (self.error)(error)
    }

    /// Signal completion.
    pub fn complete(&self) {
        (self.complete)()
    }
}

impl<T, E> fmt::Debug for Observer<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer").finish_non_exhaustive()
    }
}

/// Either a complete observer or just a `next` callback.
pub enum ObserverLike<T, E> {
    Observer(Observer<T, E>),
    Next(NextFn<T>),
}

impl<T, E> ObserverLike<T, E> {
    /// Shorthand for a bare `next` callback.
    pub fn next<F>(next: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Self::Next(Box::new(next))
    }
}

impl<T, E> From<Observer<T, E>> for ObserverLike<T, E> {
    fn from(observer: Observer<T, E>) -> Self {
        Self::Observer(observer)
    }
}

/// Build a canonical observer.
///
/// An observer is returned unchanged and the separate callbacks are
/// ignored. Otherwise the callbacks are combined, with missing `error` and
/// `complete` defaulting to no-ops.
///
/// ```rust
/// use statechart_core::normalize::{to_observer, ObserverLike};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let seen = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&seen);
///
/// let observer = to_observer::<usize, String>(
///     ObserverLike::next(move |value: &usize| {
///         counter.fetch_add(*value, Ordering::SeqCst);
///     }),
///     None,
///     None,
/// );
///
/// observer.next(&2);
/// observer.error(&"ignored".to_string());
/// observer.complete();
/// assert_eq!(seen.load(Ordering::SeqCst), 2);
/// ```
pub fn to_observer<T, E>(
    next: ObserverLike<T, E>,
    error: Option<ErrorFn<E>>,
    complete: Option<CompleteFn>,
) -> Observer<T, E>
where
    T: 'static,
    E: 'static,
{
    match next {
        ObserverLike::Observer(observer) => observer,
        ObserverLike::Next(next) => Observer {
            next,
            error: error.unwrap_or_else(|| Box::new(|_: &E| {})),
            complete: complete.unwrap_or_else(|| Box::new(|| {})),
        },
    }
}
