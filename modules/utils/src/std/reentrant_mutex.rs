use crate::core::sync::sync_reentrant_mutex_like::SyncReentrantMutexLike;


/// [`SyncReentrantMutexLike`] implementation backed by [`parking_lot::ReentrantMutex`].
pub struct StdReentrantMutex<T>(parking_lot::ReentrantMutex<T>);

impl<T> StdReentrantMutex<T> {
  /// Creates a new reentrant mutex protecting `value`.
  #[must_use]
  pub fn new(value: T) -> Self {
    Self(parking_lot::ReentrantMutex::new(value))
  }

  /// Consumes the mutex and returns the protected value.
  pub fn into_inner(self) -> T {
    self.0.into_inner()
  }

  /// Locks the mutex; the owning thread may call this again without deadlocking.
  pub fn lock(&self) -> parking_lot::ReentrantMutexGuard<'_, T> {
    self.0.lock()
  }

  /// Returns `true` when the current thread already holds the lock.
  #[must_use]
  pub fn is_owned_by_current_thread(&self) -> bool {
    self.0.is_owned_by_current_thread()
  }
}

impl<T: Default> Default for StdReentrantMutex<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}

impl<T> SyncReentrantMutexLike<T> for StdReentrantMutex<T> {
  type Guard<'a>
    = parking_lot::ReentrantMutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    StdReentrantMutex::new(value)
  }

  fn into_inner(self) -> T {
    StdReentrantMutex::into_inner(self)
  }

  fn lock(&self) -> Self::Guard<'_> {
    StdReentrantMutex::lock(self)
  }
}
