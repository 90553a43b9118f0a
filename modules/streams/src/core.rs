/// Atomic cancellation flag.
mod cancel_flag;
/// Cancellation capability.
mod cancellable;
/// Terminal signal of a stream.
mod completion;
/// Completion forwarding decisions.
mod completion_forwarding;
/// Demand model types.
mod demand;
/// Demand-aware output buffer.
mod demand_buffer;
/// Demand buffer configuration.
mod demand_buffer_config;
/// Demand bookkeeping counters.
mod demand_state;
/// Event-to-signal reconstruction operator.
mod dematerialize;
/// Sink forwarding hooks.
mod forwarding;
/// Scheduler running actions on the calling thread.
mod immediate_scheduler;
/// Manually advanced scheduler.
mod manual_scheduler;
/// Signal-to-event reification operator.
mod materialize;
/// Predicate-bounded forwarding operator.
mod prefix_while;
/// Receiver contract.
mod receiver;
/// Failure-driven resubscription operator.
mod retry_when;
/// Scheduling options.
mod schedule_options;
/// Scheduler contract.
mod scheduler;
/// Multicast relay source.
mod signal_relay;
/// Exactly-once cancellation primitive.
mod single_execution_cancellable;
/// Source-to-receiver bridge.
mod sink;
/// Source contract.
mod source;
/// Stream error definitions.
mod stream_error;
/// Reified stream signals.
mod stream_event;
/// Scheduler-deferred subscribing source.
mod subscribe_on;
/// Scheduler-deferred subscription.
mod subscribe_on_subscription;
/// Subscription contract.
mod subscription;
/// Closure-based forwarding.
mod transform_forwarding;
/// Value forwarding decisions.
mod value_forwarding;

/// Test doubles for sources and receivers.
pub mod testing;

pub use cancel_flag::CancelFlag;
pub use cancellable::Cancellable;
pub use completion::Completion;
pub use completion_forwarding::CompletionForwarding;
pub use demand::Demand;
pub use demand_buffer::DemandBufferGeneric;
pub use demand_buffer_config::DemandBufferConfig;
pub use demand_state::DemandState;
pub use dematerialize::DematerializeGeneric;
pub use forwarding::Forwarding;
pub use immediate_scheduler::ImmediateScheduler;
pub use manual_scheduler::ManualScheduler;
pub use materialize::MaterializeGeneric;
pub use prefix_while::PrefixWhileGeneric;
pub use receiver::Receiver;
pub use retry_when::{RetryTrigger, RetryWhenGeneric};
pub use schedule_options::ScheduleOptions;
pub use scheduler::{RepeatingAction, ScheduledAction, Scheduler};
pub use signal_relay::SignalRelayGeneric;
pub use single_execution_cancellable::SingleExecutionCancellableGeneric;
pub use sink::SinkGeneric;
pub use source::Source;
pub use stream_error::StreamError;
pub use stream_event::StreamEvent;
pub use subscribe_on::SubscribeOnGeneric;
pub use subscribe_on_subscription::SubscribeOnSubscriptionGeneric;
pub use subscription::Subscription;
pub use transform_forwarding::TransformForwarding;
pub use value_forwarding::ValueForwarding;
