//! Resubscription driven by a trigger source.

use alloc::{boxed::Box, sync::Arc};
use core::marker::PhantomData;

use flowlatch_utils_rs::core::{
  runtime_toolbox::{RuntimeToolbox, SyncMutexFamily, ToolboxMutex},
  sync::{ArcShared, WeakShared, sync_mutex_like::SyncMutexLike},
};

use super::{
  Completion, CompletionForwarding, Demand, Forwarding, Receiver, SignalRelayGeneric, SinkGeneric, Source,
  Subscription, ValueForwarding,
};


/// Builds the trigger stream from the stream of upstream failures.
pub type RetryTrigger<E, Trig> =
  ArcShared<dyn Fn(ArcShared<dyn Source<E, E>>) -> ArcShared<dyn Source<Trig, E>> + Send + Sync>;

type RetrySink<T, E, TB> = SinkGeneric<T, E, T, E, TB>;

/// Resubscribes to the upstream whenever a trigger stream fires.
///
/// Upstream failures never reach the downstream directly: they are published on a relay from
/// which the caller-provided trigger factory builds a trigger stream. Each trigger value
/// resubscribes the same sink to the upstream, so demand granted by the downstream carries
/// over. When the trigger stream finishes or fails, the downstream is terminated the same way.
/// When the upstream finishes, the failure stream finishes too and the downstream receives
/// [`Completion::Finished`].
pub struct RetryWhenGeneric<T, E, Trig, TB: RuntimeToolbox> {
  upstream: ArcShared<dyn Source<T, E>>,
  trigger:  RetryTrigger<E, Trig>,
  _toolbox: PhantomData<TB>,
}

struct RetryForwarding<E, TB: RuntimeToolbox>
where
  E: Send + 'static, {
  failures: ArcShared<SignalRelayGeneric<E, E, TB>>,
}

struct RetryTriggerReceiver<T, E, TB: RuntimeToolbox>
where
  T: Send + 'static,
  E: Send + 'static, {
  sink:         WeakShared<RetrySink<T, E, TB>>,
  upstream:     ArcShared<dyn Source<T, E>>,
  subscription: ToolboxMutex<Option<ArcShared<dyn Subscription>>, TB>,
}

struct RetryWhenSubscription<T, E, TB: RuntimeToolbox>
where
  T: Send + 'static,
  E: Send + 'static, {
  sink:    ArcShared<RetrySink<T, E, TB>>,
  trigger: ArcShared<RetryTriggerReceiver<T, E, TB>>,
}

impl<T, E, Trig, TB: RuntimeToolbox> RetryWhenGeneric<T, E, Trig, TB> {
  /// Creates the operator.
  #[must_use]
  pub fn new<F>(upstream: ArcShared<dyn Source<T, E>>, trigger: F) -> Self
  where
    F: Fn(ArcShared<dyn Source<E, E>>) -> ArcShared<dyn Source<Trig, E>> + Send + Sync + 'static, {
    let trigger = ArcShared::new(trigger).into_dyn(|inner| {
      inner as Arc<dyn Fn(ArcShared<dyn Source<E, E>>) -> ArcShared<dyn Source<Trig, E>> + Send + Sync>
    });
    Self { upstream, trigger, _toolbox: PhantomData }
  }
}

impl<T, E, TB> Forwarding<T, E, T, E> for RetryForwarding<E, TB>
where
  E: Clone + Send + 'static,
  TB: RuntimeToolbox,
{
  fn forward_value(&self, value: T) -> ValueForwarding<T, E> {
    ValueForwarding::Emit(value)
  }

  fn forward_completion(&self, completion: Completion<E>) -> CompletionForwarding<T, E> {
    match completion {
      | Completion::Finished => {
        self.failures.complete(Completion::Finished);
        CompletionForwarding::Complete(Completion::Finished)
      },
      | Completion::Failure(error) => {
        tracing::debug!("upstream failed; notifying retry trigger");
        self.failures.publish(error);
        CompletionForwarding::Swallow
      },
    }
  }
}

impl<T, E, TB> RetryTriggerReceiver<T, E, TB>
where
  T: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  fn cancel(&self) {
    let subscription = self.subscription.lock().take();
    if let Some(subscription) = subscription {
      subscription.cancel();
    }
  }
}

impl<T, E, Trig, TB> Receiver<Trig, E> for RetryTriggerReceiver<T, E, TB>
where
  T: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  fn receive_subscription(&self, subscription: ArcShared<dyn Subscription>) {
    *self.subscription.lock() = Some(subscription.clone());
    subscription.request(Demand::Unbounded);
  }

  fn receive_value(&self, _value: Trig) -> Demand {
    let Some(sink) = self.sink.upgrade() else {
      return Demand::NONE;
    };
    if !sink.is_cancelled() {
      tracing::debug!("retry trigger fired; resubscribing upstream");
      RetrySink::subscribe_to(&sink, &*self.upstream);
    }
    Demand::NONE
  }

  fn receive_completion(&self, completion: Completion<E>) {
    *self.subscription.lock() = None;
    if let Some(sink) = self.sink.upgrade() {
      tracing::debug!(failure = completion.is_failure(), "retry trigger terminated");
      sink.terminate(completion);
    }
  }
}

impl<T, E, TB> Subscription for RetryWhenSubscription<T, E, TB>
where
  T: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  fn request(&self, demand: Demand) {
    self.sink.demand(demand);
  }

  fn cancel(&self) {
    self.sink.cancel();
    self.trigger.cancel();
  }
}

impl<T, E, Trig, TB> Source<T, E> for RetryWhenGeneric<T, E, Trig, TB>
where
  T: Send + 'static,
  E: Clone + Send + 'static,
  Trig: 'static,
  TB: RuntimeToolbox,
{
  fn subscribe(&self, receiver: ArcShared<dyn Receiver<T, E>>) {
    let failures = ArcShared::new(SignalRelayGeneric::<E, E, TB>::new());
    let forwarding = RetryForwarding { failures: failures.clone() };
    let sink = ArcShared::new(RetrySink::<T, E, TB>::new(receiver.clone(), Box::new(forwarding)));
    let trigger = ArcShared::new(RetryTriggerReceiver {
      sink:         sink.downgrade(),
      upstream:     self.upstream.clone(),
      subscription: <TB::MutexFamily as SyncMutexFamily>::create(None),
    });

    let subscription = RetryWhenSubscription { sink: sink.clone(), trigger: trigger.clone() };
    receiver.receive_subscription(ArcShared::new(subscription).into_dyn(|inner| inner as Arc<dyn Subscription>));

    let trigger_source = (self.trigger)(failures.into_dyn(|inner| inner as Arc<dyn Source<E, E>>));
    trigger_source.subscribe(trigger.into_dyn(|inner| inner as Arc<dyn Receiver<Trig, E>>));
    RetrySink::subscribe_to(&sink, &*self.upstream);
  }
}
