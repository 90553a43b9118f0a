/// Demand buffer specialised for `StdToolbox`.
mod demand_buffer;
/// Operators specialised for `StdToolbox`.
mod operators;
/// Single-execution cancellable specialised for `StdToolbox`.
mod single_execution_cancellable;
/// Sink specialised for `StdToolbox`.
mod sink;
/// Deferred subscription specialised for `StdToolbox`.
mod subscribe_on;
/// Tokio-backed scheduler.
#[cfg(feature = "tokio-executor")]
mod tokio_scheduler;
/// Tokio scheduler configuration.
#[cfg(feature = "tokio-executor")]
mod tokio_scheduler_config;

pub use demand_buffer::DemandBuffer;
pub use operators::{Dematerialize, Materialize, PrefixWhile, RetryWhen, SignalRelay};
pub use single_execution_cancellable::SingleExecutionCancellable;
pub use sink::{PassthroughSink, Sink};
pub use subscribe_on::{SubscribeOn, SubscribeOnSubscription};
#[cfg(feature = "tokio-executor")]
pub use tokio_scheduler::TokioScheduler;
#[cfg(feature = "tokio-executor")]
pub use tokio_scheduler_config::TokioSchedulerConfig;
