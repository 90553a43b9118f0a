use alloc::{boxed::Box, sync::Arc};
use core::marker::PhantomData;

use flowlatch_utils_rs::core::{runtime_toolbox::RuntimeToolbox, sync::ArcShared};

use super::{Receiver, ScheduleOptions, Scheduler, Source, SubscribeOnSubscriptionGeneric, Subscription};


/// Source that subscribes to its upstream on a scheduler.
///
/// The downstream receives its subscription synchronously; the upstream subscription, and
/// every later request and cancellation, is performed by actions run on the scheduler.
pub struct SubscribeOnGeneric<T, E, TB: RuntimeToolbox> {
  upstream:  ArcShared<dyn Source<T, E>>,
  scheduler: ArcShared<dyn Scheduler>,
  options:   ScheduleOptions,
  _toolbox:  PhantomData<TB>,
}

impl<T, E, TB: RuntimeToolbox> SubscribeOnGeneric<T, E, TB> {
  /// Creates the operator.
  #[must_use]
  pub fn new(upstream: ArcShared<dyn Source<T, E>>, scheduler: ArcShared<dyn Scheduler>) -> Self {
    Self { upstream, scheduler, options: ScheduleOptions::new(), _toolbox: PhantomData }
  }

  /// Uses `options` for every action this operator schedules.
  #[must_use]
  pub const fn with_options(mut self, options: ScheduleOptions) -> Self {
    self.options = options;
    self
  }
}

impl<T, E, TB> Source<T, E> for SubscribeOnGeneric<T, E, TB>
where
  T: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  fn subscribe(&self, receiver: ArcShared<dyn Receiver<T, E>>) {
    let subscription = ArcShared::new(SubscribeOnSubscriptionGeneric::<T, E, TB>::new(
      self.upstream.clone(),
      receiver.clone(),
      self.scheduler.clone(),
      self.options,
    ));
    receiver.receive_subscription(subscription.clone().into_dyn(|inner| inner as Arc<dyn Subscription>));
    tracing::trace!("deferring upstream subscription");
    self.scheduler.schedule(self.options, Box::new(move || subscription.subscribe_upstream()));
  }
}
