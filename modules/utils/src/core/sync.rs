mod arc_shared;
/// Synchronous mutex abstractions shared across runtimes.
pub mod sync_mutex_like;
/// Reentrant mutex abstractions shared across runtimes.
pub mod sync_reentrant_mutex_like;
mod weak_shared;

pub use arc_shared::ArcShared;
pub use weak_shared::WeakShared;
