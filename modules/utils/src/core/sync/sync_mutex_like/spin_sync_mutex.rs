use crate::core::sync::sync_mutex_like::SyncMutexLike;


/// Thin wrapper around [`spin::Mutex`] implementing [`SyncMutexLike`].
pub struct SpinSyncMutex<T>(spin::Mutex<T>);

impl<T> SpinSyncMutex<T> {
  /// Creates a new spinlock-protected value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(spin::Mutex::new(value))
  }

  /// Consumes the wrapper and returns the underlying value.
  pub fn into_inner(self) -> T {
    self.0.into_inner()
  }

  /// Locks the mutex and returns a guard to the protected value.
  pub fn lock(&self) -> spin::MutexGuard<'_, T> {
    self.0.lock()
  }

  /// Attempts to lock without spinning.
  #[must_use]
  pub fn try_lock(&self) -> Option<spin::MutexGuard<'_, T>> {
    self.0.try_lock()
  }

  /// Returns `true` while some guard is alive.
  #[must_use]
  pub fn is_locked(&self) -> bool {
    self.0.is_locked()
  }
}

impl<T: Default> Default for SpinSyncMutex<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}

impl<T> SyncMutexLike<T> for SpinSyncMutex<T> {
  type Guard<'a>
    = spin::MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    SpinSyncMutex::new(value)
  }

  fn into_inner(self) -> T {
    SpinSyncMutex::into_inner(self)
  }

  fn lock(&self) -> Self::Guard<'_> {
    SpinSyncMutex::lock(self)
  }
}
