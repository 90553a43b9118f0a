//! Sink bridging an upstream source to a downstream receiver.

use alloc::{boxed::Box, sync::Arc};

use flowlatch_utils_rs::core::{
  runtime_toolbox::{RuntimeToolbox, SyncReentrantMutexFamily, ToolboxReentrantMutex},
  sync::{ArcShared, sync_reentrant_mutex_like::SyncReentrantMutexLike},
};

use super::{
  Completion, CompletionForwarding, Demand, DemandBufferConfig, DemandBufferGeneric, Forwarding, Receiver,
  SingleExecutionCancellableGeneric, Source, Subscription, TransformForwarding, ValueForwarding,
};

#[cfg(test)]
mod tests;

type UpstreamSlot = Option<ArcShared<dyn Subscription>>;

/// Bridges one upstream source to one downstream receiver through a demand buffer.
///
/// Toward the upstream the sink is a [`Receiver`]; toward the downstream it is the
/// [`Subscription`]. The upstream subscription slot lives inside a single-execution
/// cancellable: it may be replaced any number of times while the sink is active (the previous
/// occupant is cancelled), and once the sink is cancelled or terminated it stays empty and
/// every subscription offered to it is cancelled on arrival.
///
/// Requests to the upstream are serialized by a separate reentrant lock because a synchronous
/// upstream may deliver values, and thus re-enter the sink, from inside `request`.
pub struct SinkGeneric<In, InErr, Out, OutErr, TB: RuntimeToolbox>
where
  In: Send + 'static,
  InErr: Send + 'static,
  Out: Send + 'static,
  OutErr: Send + 'static, {
  buffer:        DemandBufferGeneric<Out, OutErr, TB>,
  upstream:      SingleExecutionCancellableGeneric<UpstreamSlot, TB>,
  upstream_lock: ToolboxReentrantMutex<(), TB>,
  forwarding:    Box<dyn Forwarding<In, InErr, Out, OutErr>>,
}

impl<In, InErr, Out, OutErr, TB> SinkGeneric<In, InErr, Out, OutErr, TB>
where
  In: Send + 'static,
  InErr: Send + 'static,
  Out: Send + 'static,
  OutErr: Send + 'static,
  TB: RuntimeToolbox,
{
  /// Creates an unattached sink delivering to `downstream`.
  #[must_use]
  pub fn new(
    downstream: ArcShared<dyn Receiver<Out, OutErr>>,
    forwarding: Box<dyn Forwarding<In, InErr, Out, OutErr>>,
  ) -> Self {
    Self::with_config(downstream, forwarding, DemandBufferConfig::default())
  }

  /// Creates an unattached sink with an explicit buffer configuration.
  #[must_use]
  pub fn with_config(
    downstream: ArcShared<dyn Receiver<Out, OutErr>>,
    forwarding: Box<dyn Forwarding<In, InErr, Out, OutErr>>,
    config: DemandBufferConfig,
  ) -> Self {
    Self {
      buffer: DemandBufferGeneric::with_config(downstream, config),
      upstream: SingleExecutionCancellableGeneric::new(None),
      upstream_lock: <TB::ReentrantMutexFamily as SyncReentrantMutexFamily>::create(()),
      forwarding,
    }
  }

  /// Creates a sink, hands it to `downstream` as its subscription, then subscribes it to
  /// `upstream`.
  pub fn bridge(
    upstream: &dyn Source<In, InErr>,
    downstream: ArcShared<dyn Receiver<Out, OutErr>>,
    forwarding: Box<dyn Forwarding<In, InErr, Out, OutErr>>,
  ) -> ArcShared<Self> {
    let sink = ArcShared::new(Self::new(downstream.clone(), forwarding));
    downstream.receive_subscription(sink.clone().into_dyn(|inner| inner as Arc<dyn Subscription>));
    Self::subscribe_to(&sink, upstream);
    sink
  }

  /// Subscribes `sink` to `upstream`, replacing its current upstream if it has one.
  pub fn subscribe_to(sink: &ArcShared<Self>, upstream: &dyn Source<In, InErr>) {
    upstream.subscribe(sink.clone().into_dyn(|inner| inner as Arc<dyn Receiver<In, InErr>>));
  }

  /// Adds downstream demand and forwards any residual demand upstream.
  pub fn demand(&self, demand: Demand) {
    let residual = self.buffer.demand(demand);
    if !residual.has_demand() {
      return;
    }
    let Some(upstream) = self.upstream.guarded_access(|slot| slot.clone()).flatten() else {
      return;
    };
    let _serialized = self.upstream_lock.lock();
    tracing::trace!(demand = ?residual, "requesting from upstream");
    upstream.request(residual);
  }

  /// Terminates the sink with `completion`.
  ///
  /// Only the first termination or cancellation takes effect: it detaches the upstream,
  /// records the terminal signal in the buffer (delivered once buffered values have drained)
  /// and cancels the detached upstream.
  pub fn terminate(&self, completion: Completion<OutErr>) {
    let Some(previous) = self.upstream.cancel_with(Option::take) else {
      return;
    };
    tracing::debug!(failure = completion.is_failure(), "terminating sink");
    self.buffer.complete(completion);
    if let Some(previous) = previous {
      previous.cancel();
    }
  }

  /// Cancels the sink on behalf of the downstream.
  ///
  /// Nothing reaches the downstream afterwards, not even values or a terminal signal buffered
  /// before the call. The upstream is cancelled unless an earlier termination already did so.
  pub fn cancel(&self) {
    self.buffer.discard();
    let Some(previous) = self.upstream.cancel_with(Option::take) else {
      return;
    };
    tracing::debug!("sink cancelled");
    if let Some(previous) = previous {
      previous.cancel();
    }
  }

  /// Returns `true` once the sink was cancelled or terminated.
  #[must_use]
  pub fn is_cancelled(&self) -> bool {
    self.upstream.is_cancelled()
  }

  /// Returns `true` while an upstream subscription is attached.
  #[must_use]
  pub fn has_upstream(&self) -> bool {
    self.upstream.guarded_access(|slot| slot.is_some()).unwrap_or(false)
  }

  /// The demand buffer feeding the downstream.
  #[must_use]
  pub const fn buffer(&self) -> &DemandBufferGeneric<Out, OutErr, TB> {
    &self.buffer
  }

  fn emit_and_terminate(&self, value: Out, completion: Completion<OutErr>) {
    if self.buffer.try_buffer(value).is_ok() {
      self.terminate(completion);
    }
  }
}

impl<T, E, TB> SinkGeneric<T, E, T, E, TB>
where
  T: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  /// Creates a sink forwarding values and failures unchanged.
  #[must_use]
  pub fn passthrough(downstream: ArcShared<dyn Receiver<T, E>>) -> Self {
    Self::new(downstream, Box::new(TransformForwarding::identity()))
  }
}

impl<In, InErr, Out, OutErr, TB> Subscription for SinkGeneric<In, InErr, Out, OutErr, TB>
where
  In: Send + 'static,
  InErr: Send + 'static,
  Out: Send + 'static,
  OutErr: Send + 'static,
  TB: RuntimeToolbox,
{
  fn request(&self, demand: Demand) {
    self.demand(demand);
  }

  fn cancel(&self) {
    SinkGeneric::cancel(self);
  }
}

impl<In, InErr, Out, OutErr, TB> Receiver<In, InErr> for SinkGeneric<In, InErr, Out, OutErr, TB>
where
  In: Send + 'static,
  InErr: Send + 'static,
  Out: Send + 'static,
  OutErr: Send + 'static,
  TB: RuntimeToolbox,
{
  fn receive_subscription(&self, subscription: ArcShared<dyn Subscription>) {
    let incoming = subscription.clone();
    let Some(previous) = self.upstream.guarded_access(move |slot| slot.replace(incoming)) else {
      tracing::trace!("sink already cancelled; rejecting upstream subscription");
      subscription.cancel();
      return;
    };
    if let Some(previous) = previous {
      tracing::debug!("replacing upstream subscription");
      previous.cancel();
    }

    let _serialized = self.upstream_lock.lock();
    let outstanding = self.buffer.attach_to_new_upstream();
    tracing::trace!(demand = ?outstanding, "attached to upstream");
    if outstanding.has_demand() {
      subscription.request(outstanding);
    }
  }

  fn receive_value(&self, value: In) -> Demand {
    if self.is_cancelled() {
      return Demand::NONE;
    }
    match self.forwarding.forward_value(value) {
      | ValueForwarding::Drop => Demand::NONE,
      | ValueForwarding::Emit(output) => self.buffer.try_buffer(output).unwrap_or(Demand::NONE),
      | ValueForwarding::Complete(completion) => {
        self.terminate(completion);
        Demand::NONE
      },
      | ValueForwarding::EmitAndComplete(output, completion) => {
        self.emit_and_terminate(output, completion);
        Demand::NONE
      },
    }
  }

  fn receive_completion(&self, completion: Completion<InErr>) {
    if self.is_cancelled() {
      return;
    }
    match self.forwarding.forward_completion(completion) {
      | CompletionForwarding::Swallow => tracing::trace!("upstream terminal signal swallowed"),
      | CompletionForwarding::Complete(completion) => self.terminate(completion),
      | CompletionForwarding::EmitAndComplete(output, completion) => self.emit_and_terminate(output, completion),
    }
  }
}
