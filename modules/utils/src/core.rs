/// Runtime toolbox and the mutex families it selects.
pub mod runtime_toolbox;
/// Synchronization primitives and shared ownership abstractions.
pub mod sync;
