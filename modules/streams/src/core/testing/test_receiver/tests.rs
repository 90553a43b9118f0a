use alloc::{sync::Arc, vec::Vec};

use flowlatch_utils_rs::core::sync::{ArcShared, sync_mutex_like::SpinSyncMutex};

use super::TestReceiver;
use crate::core::{Completion, Demand, Receiver, Subscription, testing::RecordedSignal};

#[derive(Default)]
struct RecordingSubscription {
  requests:  SpinSyncMutex<Vec<Demand>>,
  cancelled: SpinSyncMutex<bool>,
}

impl Subscription for RecordingSubscription {
  fn request(&self, demand: Demand) {
    self.requests.lock().push(demand);
  }

  fn cancel(&self) {
    *self.cancelled.lock() = true;
  }
}

fn subscribe(receiver: &TestReceiver<u32, ()>) -> ArcShared<RecordingSubscription> {
  let subscription = ArcShared::new(RecordingSubscription::default());
  receiver.receive_subscription(subscription.clone().into_dyn(|inner| inner as Arc<dyn Subscription>));
  subscription
}

#[test]
fn requests_initial_demand_on_subscribe() {
  let receiver = TestReceiver::<u32, ()>::new().with_initial_demand(Demand::Finite(2));
  let subscription = subscribe(&receiver);
  assert_eq!(*subscription.requests.lock(), [Demand::Finite(2)].to_vec());
  assert!(receiver.has_subscription());
}

#[test]
fn reentrant_request_is_issued_from_value_delivery() {
  let receiver = TestReceiver::<u32, ()>::new().with_reentrant_request(Demand::Finite(1));
  let subscription = subscribe(&receiver);
  assert_eq!(receiver.receive_value(7), Demand::NONE);
  assert_eq!(*subscription.requests.lock(), [Demand::Finite(1)].to_vec());
}

#[test]
fn cancelling_on_subscribe_drops_the_subscription() {
  let receiver = TestReceiver::<u32, ()>::new().with_initial_demand(Demand::Unbounded).cancelling_on_subscribe();
  let subscription = subscribe(&receiver);
  assert!(*subscription.cancelled.lock());
  assert!(subscription.requests.lock().is_empty());
  assert!(!receiver.has_subscription());
}

#[test]
fn records_signals_in_order() {
  let receiver = TestReceiver::<u32, ()>::new().with_demand_per_value(Demand::Finite(1));
  subscribe(&receiver);
  assert_eq!(receiver.receive_value(1), Demand::Finite(1));
  receiver.receive_completion(Completion::Failure(()));

  assert_eq!(receiver.signals(), [
    RecordedSignal::Subscribed,
    RecordedSignal::Value(1),
    RecordedSignal::Completion(Completion::Failure(()))
  ]
  .to_vec());
  assert_eq!(receiver.values(), [1].to_vec());
  assert_eq!(receiver.value_count(), 1);
  assert!(receiver.is_completed());
  assert!(!receiver.has_subscription());
}

#[test]
fn cancels_from_inside_the_configured_delivery() {
  let receiver = TestReceiver::<u32, ()>::new().cancelling_after(2).with_demand_per_value(Demand::Finite(1));
  let subscription = subscribe(&receiver);
  assert_eq!(receiver.receive_value(1), Demand::Finite(1));
  assert!(!*subscription.cancelled.lock());
  assert_eq!(receiver.receive_value(2), Demand::NONE);
  assert!(*subscription.cancelled.lock());
  assert!(!receiver.has_subscription());
}
