//! Runtime toolbox abstraction selecting synchronization families.

mod sync_mutex_family;
mod sync_reentrant_mutex_family;
#[cfg(all(test, feature = "std"))]
mod tests;

pub use sync_mutex_family::{SpinMutexFamily, SyncMutexFamily};
pub use sync_reentrant_mutex_family::SyncReentrantMutexFamily;

/// Provides access to the synchronization primitives required by a runtime.
///
/// Components that need locks are generic over a toolbox instead of a concrete mutex so the
/// lock implementation can be swapped without touching the component.
pub trait RuntimeToolbox: Send + Sync + 'static {
  /// Family producing plain (non-reentrant) mutexes.
  type MutexFamily: SyncMutexFamily;
  /// Family producing mutexes that tolerate same-thread reacquisition.
  type ReentrantMutexFamily: SyncReentrantMutexFamily;
}

/// Helper alias exposing the mutex type produced by the selected toolbox.
pub type ToolboxMutex<T, TB> = <<TB as RuntimeToolbox>::MutexFamily as SyncMutexFamily>::Mutex<T>;

/// Helper alias exposing the reentrant mutex type produced by the selected toolbox.
pub type ToolboxReentrantMutex<T, TB> =
  <<TB as RuntimeToolbox>::ReentrantMutexFamily as SyncReentrantMutexFamily>::Mutex<T>;
