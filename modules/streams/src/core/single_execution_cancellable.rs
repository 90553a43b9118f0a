//! Cancellation flag whose action runs exactly once.

use flowlatch_utils_rs::core::{
  runtime_toolbox::{RuntimeToolbox, SyncMutexFamily, ToolboxMutex},
  sync::sync_mutex_like::SyncMutexLike,
};

use super::Cancellable;


struct CancellableState<S> {
  cancelled: bool,
  guarded:   S,
}

/// Cancellation flag that runs its cancellation action exactly once.
///
/// The flag shares its lock with a piece of guarded state `S`. Anything the cancellation action
/// touches must be read or written through [`guarded_access`](Self::guarded_access), which
/// refuses to run once cancellation has happened; this closes the window between an in-flight
/// mutation and a concurrent cancel.
///
/// Both closures run under the lock and must not call back into the same instance. Side
/// effects (cancelling a subscription, notifying a receiver) belong after the call, using the
/// value returned from the closure.
pub struct SingleExecutionCancellableGeneric<S, TB: RuntimeToolbox>
where
  S: Send + 'static, {
  state: ToolboxMutex<CancellableState<S>, TB>,
}

impl<S, TB> SingleExecutionCancellableGeneric<S, TB>
where
  S: Send + 'static,
  TB: RuntimeToolbox,
{
  /// Creates an active instance guarding `guarded`.
  #[must_use]
  pub fn new(guarded: S) -> Self {
    Self { state: <TB::MutexFamily as SyncMutexFamily>::create(CancellableState { cancelled: false, guarded }) }
  }

  /// Cancels, running `action` if this call is the one that flipped the flag.
  ///
  /// The flag is set before `action` runs, so concurrent callers observe the cancellation
  /// even while the action is still executing. Returns `None` for every call but the first.
  pub fn cancel_with<R>(&self, action: impl FnOnce(&mut S) -> R) -> Option<R> {
    let mut state = self.state.lock();
    if state.cancelled {
      return None;
    }
    state.cancelled = true;
    Some(action(&mut state.guarded))
  }

  /// Returns `true` once cancellation has happened.
  #[must_use]
  pub fn is_cancelled(&self) -> bool {
    self.state.lock().cancelled
  }

  /// Runs `body` against the guarded state unless already cancelled.
  pub fn guarded_access<R>(&self, body: impl FnOnce(&mut S) -> R) -> Option<R> {
    let mut state = self.state.lock();
    if state.cancelled {
      return None;
    }
    Some(body(&mut state.guarded))
  }
}

impl<S, TB> Default for SingleExecutionCancellableGeneric<S, TB>
where
  S: Default + Send + 'static,
  TB: RuntimeToolbox,
{
  fn default() -> Self {
    Self::new(S::default())
  }
}

impl<TB: RuntimeToolbox> Cancellable for SingleExecutionCancellableGeneric<(), TB> {
  fn cancel(&self) {
    self.cancel_with(|_| ());
  }

  fn is_cancelled(&self) -> bool {
    SingleExecutionCancellableGeneric::is_cancelled(self)
  }
}
