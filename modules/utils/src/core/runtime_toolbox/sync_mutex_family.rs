//! Mutex family abstraction for runtime injection.


use crate::core::sync::sync_mutex_like::{SpinSyncMutex, SyncMutexLike};

/// Provides a constructor for the plain mutexes used by a runtime.
pub trait SyncMutexFamily {
  /// Concrete mutex type produced by this family.
  type Mutex<T>: SyncMutexLike<T> + Send + Sync + 'static
  where
    T: Send + 'static;

  /// Creates a new mutex protecting the given value.
  fn create<T>(value: T) -> Self::Mutex<T>
  where
    T: Send + 'static;
}

/// Family whose mutexes spin, so buffers and cancellation flags work without an operating
/// system.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpinMutexFamily;

impl SyncMutexFamily for SpinMutexFamily {
  type Mutex<T>
    = SpinSyncMutex<T>
  where
    T: Send + 'static;

  fn create<T>(value: T) -> Self::Mutex<T>
  where
    T: Send + 'static, {
    SpinSyncMutex::new(value)
  }
}
