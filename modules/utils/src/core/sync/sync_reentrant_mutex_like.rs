use core::ops::Deref;

/// Mutex abstraction that the owning thread may acquire again while already holding it.
///
/// Because several guards of the same thread can be alive at once, the guard only grants
/// shared access. Mutable state behind a reentrant mutex needs its own interior
/// mutability (`Cell`, `RefCell`, ...).
pub trait SyncReentrantMutexLike<T> {
  /// Guard type returned by [`SyncReentrantMutexLike::lock`].
  type Guard<'a>: Deref<Target = T>
  where
    Self: 'a,
    T: 'a;

  /// Creates a new mutex instance wrapping the provided value.
  fn new(value: T) -> Self;

  /// Consumes the mutex and returns the inner value.
  fn into_inner(self) -> T;

  /// Locks the mutex, succeeding immediately when the current thread already owns it.
  fn lock(&self) -> Self::Guard<'_>;

  /// Runs `f` while holding the lock, releasing it on every exit path.
  fn with_lock<R>(&self, f: impl FnOnce(&T) -> R) -> R {
    let guard = self.lock();
    f(&guard)
  }
}
