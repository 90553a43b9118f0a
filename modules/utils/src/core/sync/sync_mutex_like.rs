use core::ops::{Deref, DerefMut};

mod spin_sync_mutex;

pub use spin_sync_mutex::SpinSyncMutex;

/// Generic mutex abstraction for runtime-agnostic code.
///
/// Acquiring returns a guard; dropping the guard releases the lock. Re-acquiring on the
/// thread that already holds the guard is not supported and either deadlocks or spins
/// forever depending on the implementation. Use
/// [`SyncReentrantMutexLike`](super::sync_reentrant_mutex_like::SyncReentrantMutexLike) for
/// that case.
pub trait SyncMutexLike<T> {
  /// Guard type returned by [`SyncMutexLike::lock`].
  type Guard<'a>: Deref<Target = T> + DerefMut
  where
    Self: 'a,
    T: 'a;

  /// Creates a new mutex instance wrapping the provided value.
  fn new(value: T) -> Self;

  /// Consumes the mutex and returns the inner value.
  fn into_inner(self) -> T;

  /// Locks the mutex and returns a guard to the protected value.
  fn lock(&self) -> Self::Guard<'_>;

  /// Runs `f` with exclusive access to the protected value.
  ///
  /// The lock is released on every exit path, including unwinding out of `f`.
  fn with_lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    let mut guard = self.lock();
    f(&mut guard)
  }
}

/// Convenience alias for guards produced by [`SyncMutexLike`].
pub type SyncMutexLikeGuard<'a, M, T> = <M as SyncMutexLike<T>>::Guard<'a>;
