//! Reentrant mutex family abstraction for runtime injection.

use crate::core::sync::sync_reentrant_mutex_like::SyncReentrantMutexLike;

/// Provides a constructor for the reentrant mutexes used by a runtime.
pub trait SyncReentrantMutexFamily {
  /// Concrete reentrant mutex type produced by this family.
  type Mutex<T>: SyncReentrantMutexLike<T> + Send + Sync + 'static
  where
    T: Send + 'static;

  /// Creates a new reentrant mutex protecting the given value.
  fn create<T>(value: T) -> Self::Mutex<T>
  where
    T: Send + 'static;
}
