use crate::{
  core::runtime_toolbox::{SyncMutexFamily, SyncReentrantMutexFamily},
  std::{StdReentrantMutex, StdSyncMutex},
};


/// Plain mutexes that park the thread while contended.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdMutexFamily;

impl SyncMutexFamily for StdMutexFamily {
  type Mutex<T>
    = StdSyncMutex<T>
  where
    T: Send + 'static;

  fn create<T>(value: T) -> Self::Mutex<T>
  where
    T: Send + 'static, {
    StdSyncMutex::new(value)
  }
}

/// Reentrant mutexes that let a synchronous upstream call back into its sink while a request
/// is still in flight on the same thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdReentrantMutexFamily;

impl SyncReentrantMutexFamily for StdReentrantMutexFamily {
  type Mutex<T>
    = StdReentrantMutex<T>
  where
    T: Send + 'static;

  fn create<T>(value: T) -> Self::Mutex<T>
  where
    T: Send + 'static, {
    StdReentrantMutex::new(value)
  }
}
