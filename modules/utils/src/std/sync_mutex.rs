extern crate std;

use std::sync::{Mutex, PoisonError};

use super::StdSyncMutexGuard;
use crate::core::sync::sync_mutex_like::SyncMutexLike;


/// [`SyncMutexLike`] implementation backed by [`std::sync::Mutex`].
///
/// A panic while the lock is held does not poison subsequent acquisitions: the protected
/// state is handed out as-is, matching the behaviour of the spin-based mutex.
pub struct StdSyncMutex<T>(Mutex<T>);

impl<T> StdSyncMutex<T> {
  /// Creates a new mutex protecting `value`.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(Mutex::new(value))
  }

  /// Consumes the mutex and returns the protected value.
  pub fn into_inner(self) -> T {
    self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
  }

  /// Locks the mutex, blocking the current thread until it is available.
  pub fn lock(&self) -> StdSyncMutexGuard<'_, T> {
    StdSyncMutexGuard::from_std(self.0.lock().unwrap_or_else(PoisonError::into_inner))
  }
}

impl<T: Default> Default for StdSyncMutex<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}

impl<T> SyncMutexLike<T> for StdSyncMutex<T> {
  type Guard<'a>
    = StdSyncMutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    StdSyncMutex::new(value)
  }

  fn into_inner(self) -> T {
    StdSyncMutex::into_inner(self)
  }

  fn lock(&self) -> Self::Guard<'_> {
    StdSyncMutex::lock(self)
  }
}
