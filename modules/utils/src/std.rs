/// Reentrant mutex built on `parking_lot::ReentrantMutex`.
mod reentrant_mutex;
/// Runtime toolboxes and mutex families for std environments.
pub mod runtime_toolbox;
/// Synchronization primitives built on top of `std::sync::Mutex`.
mod sync_mutex;
/// Guard returned by [`StdSyncMutex`].
mod sync_mutex_guard;

pub use reentrant_mutex::StdReentrantMutex;
pub use sync_mutex::StdSyncMutex;
pub use sync_mutex_guard::StdSyncMutexGuard;
