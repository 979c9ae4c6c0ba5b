//! Entry, exit and transition callbacks.
//!
//! Hooks take no arguments. Anything a hook needs from the surrounding
//! program has to be captured by the closure when it is registered.

use std::fmt;
use std::sync::Arc;

/// Error type a fallible hook may return.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Result of running a hook.
pub type HookResult = Result<(), HookError>;

type HookFn = Arc<dyn Fn() -> HookResult + Send + Sync>;

/// A zero-argument callback with reference identity.
///
/// Cloning a `Hook` yields the same hook: both clones compare equal under
/// [`Hook::same_as`]. Two hooks built from separate calls to [`Hook::new`]
/// never compare equal, even when the closures behave identically.
///
/// # Example
///
/// ```rust
/// use hsm::core::Hook;
///
/// let hook = Hook::new(|| println!("entered"));
/// let alias = hook.clone();
/// let other = Hook::new(|| println!("entered"));
///
/// assert!(hook.same_as(&alias));
/// assert!(!hook.same_as(&other));
/// ```
#[derive(Clone)]
pub struct Hook {
    action: HookFn,
}

impl Hook {
    /// Wrap an infallible callback.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::fallible(move || {
            action();
            Ok(())
        })
    }

    /// Wrap a callback that may fail.
    ///
    /// A failing entry or exit hook aborts the `fire` call that ran it and
    /// leaves the machine in its pre-transition state.
    pub fn fallible<F>(action: F) -> Self
    where
        F: Fn() -> HookResult + Send + Sync + 'static,
    {
        Hook {
            action: Arc::new(action),
        }
    }

    /// Run the callback.
    pub fn call(&self) -> HookResult {
        (self.action)()
    }

    /// Reference identity check.
    pub fn same_as(&self, other: &Hook) -> bool {
        Arc::ptr_eq(&self.action, &other.action)
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook")
            .field("ptr", &Arc::as_ptr(&self.action).cast::<()>())
            .finish()
    }
}
