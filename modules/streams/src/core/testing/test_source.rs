use alloc::{sync::Arc, vec::Vec};

use flowlatch_utils_rs::core::sync::{ArcShared, sync_mutex_like::SpinSyncMutex};

use crate::core::{Completion, Demand, Receiver, Source, Subscription};


struct SubscriptionRecord<T, E> {
  receiver:  ArcShared<dyn Receiver<T, E>>,
  requests:  Vec<Demand>,
  cancelled: bool,
  completed: bool,
}

struct SourceState<T, E> {
  records: Vec<SubscriptionRecord<T, E>>,
}

/// Manually driven source.
///
/// Emits whatever the test tells it to, regardless of demand, always to the most recent
/// subscription that is neither cancelled nor completed. Requests and cancellations are
/// recorded per subscription, indexed in subscription order.
pub struct TestSource<T, E> {
  state: ArcShared<SpinSyncMutex<SourceState<T, E>>>,
}

struct TestSubscription<T, E> {
  index: usize,
  state: ArcShared<SpinSyncMutex<SourceState<T, E>>>,
}

impl<T, E> TestSource<T, E> {
  /// Creates a source without subscribers.
  #[must_use]
  pub fn new() -> Self {
    Self { state: ArcShared::new(SpinSyncMutex::new(SourceState { records: Vec::new() })) }
  }

  /// Emits `value` to the active subscription and returns the demand it granted.
  ///
  /// Returns [`Demand::NONE`] when nobody is subscribed.
  pub fn emit(&self, value: T) -> Demand {
    match self.active_receiver() {
      | Some(receiver) => receiver.receive_value(value),
      | None => Demand::NONE,
    }
  }

  /// Emits every value in order.
  pub fn emit_all(&self, values: impl IntoIterator<Item = T>) {
    for value in values {
      self.emit(value);
    }
  }

  /// Completes the active subscription.
  pub fn complete(&self, completion: Completion<E>) {
    let receiver = {
      let mut state = self.state.lock();
      state.records.iter_mut().rev().find(|record| !record.cancelled && !record.completed).map(|record| {
        record.completed = true;
        record.receiver.clone()
      })
    };
    if let Some(receiver) = receiver {
      receiver.receive_completion(completion);
    }
  }

  /// Number of subscriptions ever made.
  #[must_use]
  pub fn subscription_count(&self) -> usize {
    self.state.lock().records.len()
  }

  /// Number of subscriptions neither cancelled nor completed.
  #[must_use]
  pub fn active_count(&self) -> usize {
    self.state.lock().records.iter().filter(|record| !record.cancelled && !record.completed).count()
  }

  /// Requests received by the `index`-th subscription.
  #[must_use]
  pub fn requests(&self, index: usize) -> Vec<Demand> {
    self.state.lock().records.get(index).map(|record| record.requests.clone()).unwrap_or_default()
  }

  /// Sum of the requests received by the `index`-th subscription.
  #[must_use]
  pub fn requested(&self, index: usize) -> Demand {
    self.requests(index).into_iter().fold(Demand::NONE, |total, demand| total + demand)
  }

  /// Returns `true` when the `index`-th subscription was cancelled.
  #[must_use]
  pub fn is_cancelled(&self, index: usize) -> bool {
    self.state.lock().records.get(index).is_some_and(|record| record.cancelled)
  }

  fn active_receiver(&self) -> Option<ArcShared<dyn Receiver<T, E>>> {
    let state = self.state.lock();
    state.records.iter().rev().find(|record| !record.cancelled && !record.completed).map(|record| record.receiver.clone())
  }
}

impl<T, E> Clone for TestSource<T, E> {
  fn clone(&self) -> Self {
    Self { state: self.state.clone() }
  }
}

impl<T, E> Default for TestSource<T, E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T, E> Source<T, E> for TestSource<T, E>
where
  T: Send + 'static,
  E: Send + 'static,
{
  fn subscribe(&self, receiver: ArcShared<dyn Receiver<T, E>>) {
    let index = {
      let mut state = self.state.lock();
      state.records.push(SubscriptionRecord {
        receiver:  receiver.clone(),
        requests:  Vec::new(),
        cancelled: false,
        completed: false,
      });
      state.records.len() - 1
    };
    let subscription = ArcShared::new(TestSubscription { index, state: self.state.clone() });
    receiver.receive_subscription(subscription.into_dyn(|inner| inner as Arc<dyn Subscription>));
  }
}

impl<T, E> Subscription for TestSubscription<T, E>
where
  T: Send + 'static,
  E: Send + 'static,
{
  fn request(&self, demand: Demand) {
    if !demand.has_demand() {
      return;
    }
    let mut state = self.state.lock();
    if let Some(record) = state.records.get_mut(self.index).filter(|record| !record.cancelled) {
      record.requests.push(demand);
    }
  }

  fn cancel(&self) {
    if let Some(record) = self.state.lock().records.get_mut(self.index) {
      record.cancelled = true;
    }
  }
}
