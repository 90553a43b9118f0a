use alloc::vec::Vec;

use flowlatch_utils_rs::core::sync::{ArcShared, sync_mutex_like::SpinSyncMutex};

use super::RecordedSignal;
use crate::core::{Completion, Demand, Receiver, Subscription};

#[cfg(test)]
mod tests;

struct ReceiverState<T, E> {
  subscription: Option<ArcShared<dyn Subscription>>,
  signals:      Vec<RecordedSignal<T, E>>,
}

/// Receiver that records every signal it observes.
///
/// By default it requests nothing; configure its demand with the `with_*` builders or drive
/// it by hand through [`request`](Self::request).
pub struct TestReceiver<T, E> {
  initial_demand:      Demand,
  demand_per_value:    Demand,
  reentrant_request:   Demand,
  cancel_on_subscribe: bool,
  cancel_after:        Option<usize>,
  state:               SpinSyncMutex<ReceiverState<T, E>>,
}

impl<T, E> TestReceiver<T, E> {
  /// Creates a receiver that never requests on its own.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      initial_demand:      Demand::NONE,
      demand_per_value:    Demand::NONE,
      reentrant_request:   Demand::NONE,
      cancel_on_subscribe: false,
      cancel_after:        None,
      state:               SpinSyncMutex::new(ReceiverState { subscription: None, signals: Vec::new() }),
    }
  }

  /// Requests `demand` as soon as the subscription arrives.
  #[must_use]
  pub fn with_initial_demand(mut self, demand: Demand) -> Self {
    self.initial_demand = demand;
    self
  }

  /// Returns `demand` from every value delivery.
  #[must_use]
  pub fn with_demand_per_value(mut self, demand: Demand) -> Self {
    self.demand_per_value = demand;
    self
  }

  /// Calls `request(demand)` on the subscription from inside every value delivery.
  #[must_use]
  pub fn with_reentrant_request(mut self, demand: Demand) -> Self {
    self.reentrant_request = demand;
    self
  }

  /// Cancels the subscription right after receiving it.
  #[must_use]
  pub fn cancelling_on_subscribe(mut self) -> Self {
    self.cancel_on_subscribe = true;
    self
  }

  /// Cancels the subscription from inside the delivery of the `count`-th value.
  #[must_use]
  pub fn cancelling_after(mut self, count: usize) -> Self {
    self.cancel_after = Some(count);
    self
  }

  /// Requests `demand` through the current subscription, if any.
  pub fn request(&self, demand: Demand) {
    if let Some(subscription) = self.subscription() {
      subscription.request(demand);
    }
  }

  /// Cancels the current subscription, if any.
  pub fn cancel(&self) {
    let subscription = self.state.lock().subscription.take();
    if let Some(subscription) = subscription {
      subscription.cancel();
    }
  }

  /// Returns `true` while a subscription is held.
  #[must_use]
  pub fn has_subscription(&self) -> bool {
    self.state.lock().subscription.is_some()
  }

  /// Number of values received so far.
  #[must_use]
  pub fn value_count(&self) -> usize {
    self.state.lock().signals.iter().filter(|signal| matches!(signal, RecordedSignal::Value(_))).count()
  }

  /// Returns `true` once a terminal signal was received.
  #[must_use]
  pub fn is_completed(&self) -> bool {
    self.state.lock().signals.iter().any(|signal| matches!(signal, RecordedSignal::Completion(_)))
  }

  fn subscription(&self) -> Option<ArcShared<dyn Subscription>> {
    self.state.lock().subscription.clone()
  }

  fn record(&self, signal: RecordedSignal<T, E>) {
    self.state.lock().signals.push(signal);
  }
}

impl<T: Clone, E> TestReceiver<T, E> {
  /// Values received so far, in order.
  #[must_use]
  pub fn values(&self) -> Vec<T> {
    self
      .state
      .lock()
      .signals
      .iter()
      .filter_map(|signal| match signal {
        | RecordedSignal::Value(value) => Some(value.clone()),
        | _ => None,
      })
      .collect()
  }
}

impl<T, E: Clone> TestReceiver<T, E> {
  /// Terminal signals received so far; more than one means a protocol violation.
  #[must_use]
  pub fn completions(&self) -> Vec<Completion<E>> {
    self
      .state
      .lock()
      .signals
      .iter()
      .filter_map(|signal| match signal {
        | RecordedSignal::Completion(completion) => Some(completion.clone()),
        | _ => None,
      })
      .collect()
  }
}

impl<T: Clone, E: Clone> TestReceiver<T, E> {
  /// Every signal received so far, in order.
  #[must_use]
  pub fn signals(&self) -> Vec<RecordedSignal<T, E>> {
    self.state.lock().signals.clone()
  }
}

impl<T, E> Default for TestReceiver<T, E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T, E> Receiver<T, E> for TestReceiver<T, E>
where
  T: Send,
  E: Send,
{
  fn receive_subscription(&self, subscription: ArcShared<dyn Subscription>) {
    {
      let mut state = self.state.lock();
      state.signals.push(RecordedSignal::Subscribed);
      state.subscription = Some(subscription.clone());
    }
    if self.cancel_on_subscribe {
      self.cancel();
    } else if self.initial_demand.has_demand() {
      subscription.request(self.initial_demand);
    }
  }

  fn receive_value(&self, value: T) -> Demand {
    self.record(RecordedSignal::Value(value));
    if self.cancel_after.is_some_and(|count| self.value_count() >= count) {
      self.cancel();
      return Demand::NONE;
    }
    if self.reentrant_request.has_demand() {
      self.request(self.reentrant_request);
    }
    self.demand_per_value
  }

  fn receive_completion(&self, completion: Completion<E>) {
    let mut state = self.state.lock();
    state.signals.push(RecordedSignal::Completion(completion));
    state.subscription = None;
  }
}
