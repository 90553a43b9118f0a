//! Subscription that performs the upstream subscribe, requests and cancellation on a
//! scheduler.

use alloc::boxed::Box;
use core::mem;

use flowlatch_utils_rs::core::{runtime_toolbox::RuntimeToolbox, sync::ArcShared};

use super::{
  Demand, Receiver, ScheduleOptions, Scheduler, SingleExecutionCancellableGeneric, SinkGeneric, Source, Subscription,
};


type PassthroughSink<T, E, TB> = SinkGeneric<T, E, T, E, TB>;

struct DeferredState<T, E, TB: RuntimeToolbox>
where
  T: Send + 'static,
  E: Send + 'static, {
  sink:    Option<ArcShared<PassthroughSink<T, E, TB>>>,
  pending: Demand,
}

/// Subscription handed out by [`SubscribeOnGeneric`](super::SubscribeOnGeneric).
///
/// Until the deferred subscribe action has run there is no sink, and requested demand is
/// accumulated locally. Afterwards requests and cancellation are forwarded to the sink through
/// the scheduler. The sink slot and the pending demand are only touched through the
/// cancellable's guarded access, so a cancel racing the deferred subscribe either prevents it
/// or sees its sink.
pub struct SubscribeOnSubscriptionGeneric<T, E, TB: RuntimeToolbox>
where
  T: Send + 'static,
  E: Send + 'static, {
  upstream:   ArcShared<dyn Source<T, E>>,
  downstream: ArcShared<dyn Receiver<T, E>>,
  scheduler:  ArcShared<dyn Scheduler>,
  options:    ScheduleOptions,
  state:      SingleExecutionCancellableGeneric<DeferredState<T, E, TB>, TB>,
}

impl<T, E, TB> SubscribeOnSubscriptionGeneric<T, E, TB>
where
  T: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  /// Creates a subscription whose upstream has not been subscribed yet.
  #[must_use]
  pub fn new(
    upstream: ArcShared<dyn Source<T, E>>,
    downstream: ArcShared<dyn Receiver<T, E>>,
    scheduler: ArcShared<dyn Scheduler>,
    options: ScheduleOptions,
  ) -> Self {
    Self {
      upstream,
      downstream,
      scheduler,
      options,
      state: SingleExecutionCancellableGeneric::new(DeferredState { sink: None, pending: Demand::NONE }),
    }
  }

  /// Creates the sink, subscribes it upstream and replays the demand gathered so far.
  ///
  /// Runs on the scheduler. Does nothing once the subscription was cancelled.
  pub fn subscribe_upstream(&self) {
    let sink = ArcShared::new(PassthroughSink::<T, E, TB>::passthrough(self.downstream.clone()));
    let installed = sink.clone();
    let Some(pending) = self.state.guarded_access(move |state| {
      state.sink = Some(installed);
      mem::replace(&mut state.pending, Demand::NONE)
    }) else {
      tracing::trace!("cancelled before the deferred subscription ran");
      return;
    };

    tracing::debug!(demand = ?pending, "subscribing upstream");
    PassthroughSink::subscribe_to(&sink, &*self.upstream);
    if pending.has_demand() && !self.state.is_cancelled() {
      sink.demand(pending);
    }
  }

  /// Returns `true` once the deferred subscribe action has installed its sink.
  #[must_use]
  pub fn is_subscribed(&self) -> bool {
    self.state.guarded_access(|state| state.sink.is_some()).unwrap_or(false)
  }

  /// Demand requested before the sink existed and not yet replayed.
  #[must_use]
  pub fn pending_demand(&self) -> Demand {
    self.state.guarded_access(|state| state.pending).unwrap_or(Demand::NONE)
  }
}

impl<T, E, TB> Subscription for SubscribeOnSubscriptionGeneric<T, E, TB>
where
  T: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  fn request(&self, demand: Demand) {
    if !demand.has_demand() {
      return;
    }
    let sink = self
      .state
      .guarded_access(|state| match &state.sink {
        | Some(sink) => Some(sink.clone()),
        | None => {
          state.pending += demand;
          None
        },
      })
      .flatten();
    if let Some(sink) = sink {
      self.scheduler.schedule(self.options, Box::new(move || sink.demand(demand)));
    }
  }

  fn cancel(&self) {
    let Some(sink) = self.state.cancel_with(|state| state.sink.take()) else {
      return;
    };
    match sink {
      | Some(sink) => {
        sink.buffer().discard();
        tracing::debug!("scheduling upstream cancellation");
        self.scheduler.schedule(self.options, Box::new(move || sink.cancel()));
      },
      | None => tracing::trace!("cancelled before subscribing upstream"),
    }
  }
}
