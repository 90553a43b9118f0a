extern crate std;

use alloc::{boxed::Box, sync::Arc, vec::Vec};
use std::{sync::Barrier, thread};

use flowlatch_utils_rs::{
  core::sync::{ArcShared, sync_mutex_like::SpinSyncMutex},
  std::runtime_toolbox::StdToolbox,
};
use portable_atomic::{AtomicUsize, Ordering};

use super::SinkGeneric;
use crate::core::{
  Completion, Demand, Receiver, Source, Subscription, TransformForwarding,
  testing::{RecordedSignal, TestReceiver, TestSource},
};

type Sink = SinkGeneric<u32, &'static str, u32, &'static str, StdToolbox>;
type Recorder = TestReceiver<u32, &'static str>;

fn downstream(receiver: &ArcShared<Recorder>) -> ArcShared<dyn Receiver<u32, &'static str>> {
  receiver.clone().into_dyn(|inner| inner as Arc<dyn Receiver<u32, &'static str>>)
}

fn bridge(source: &TestSource<u32, &'static str>, receiver: &ArcShared<Recorder>) -> ArcShared<Sink> {
  Sink::bridge(source, downstream(receiver), Box::new(TransformForwarding::identity()))
}

#[derive(Default)]
struct CountingSubscription {
  requests: SpinSyncMutex<Vec<Demand>>,
  cancels:  AtomicUsize,
}

impl Subscription for CountingSubscription {
  fn request(&self, demand: Demand) {
    self.requests.lock().push(demand);
  }

  fn cancel(&self) {
    self.cancels.fetch_add(1, Ordering::SeqCst);
  }
}

/// Synchronous source emitting `0..end` from inside `request`.
struct RangeSource {
  end: u32,
}

struct RangeState {
  next:     u32,
  demand:   Demand,
  emitting: bool,
  done:     bool,
}

struct RangeSubscription {
  end:      u32,
  receiver: ArcShared<dyn Receiver<u32, &'static str>>,
  state:    SpinSyncMutex<RangeState>,
}

impl Subscription for RangeSubscription {
  fn request(&self, demand: Demand) {
    {
      let mut state = self.state.lock();
      state.demand += demand;
      if state.emitting || state.done {
        return;
      }
      state.emitting = true;
    }
    loop {
      let next = {
        let mut state = self.state.lock();
        if state.next == self.end {
          state.done = true;
          state.emitting = false;
          None
        } else if state.demand.has_demand() {
          state.demand -= Demand::Finite(1);
          state.next += 1;
          Some(state.next - 1)
        } else {
          state.emitting = false;
          return;
        }
      };
      match next {
        | Some(value) => {
          let granted = self.receiver.receive_value(value);
          self.state.lock().demand += granted;
        },
        | None => {
          self.receiver.receive_completion(Completion::Finished);
          return;
        },
      }
    }
  }

  fn cancel(&self) {
    self.state.lock().done = true;
  }
}

impl Source<u32, &'static str> for RangeSource {
  fn subscribe(&self, receiver: ArcShared<dyn Receiver<u32, &'static str>>) {
    let subscription = ArcShared::new(RangeSubscription {
      end:      self.end,
      receiver: receiver.clone(),
      state:    SpinSyncMutex::new(RangeState { next: 0, demand: Demand::NONE, emitting: false, done: false }),
    });
    receiver.receive_subscription(subscription.into_dyn(|inner| inner as Arc<dyn Subscription>));
  }
}

#[test]
fn demand_granted_before_attachment_is_requested_on_attach() {
  let source = TestSource::new();
  let receiver = ArcShared::new(Recorder::new().with_initial_demand(Demand::Finite(2)));
  let sink = bridge(&source, &receiver);

  assert!(sink.has_upstream());
  assert_eq!(source.requests(0), [Demand::Finite(2)].to_vec());
}

#[test]
fn values_beyond_demand_are_buffered() {
  let source = TestSource::new();
  let receiver = ArcShared::new(Recorder::new().with_initial_demand(Demand::Finite(2)));
  let sink = bridge(&source, &receiver);
  source.emit_all([1, 2, 3]);

  assert_eq!(receiver.values(), [1, 2].to_vec());
  assert_eq!(sink.buffer().len(), 1);

  receiver.request(Demand::Finite(1));
  assert_eq!(receiver.values(), [1, 2, 3].to_vec());
  assert_eq!(source.requests(0), [Demand::Finite(2), Demand::Finite(1)].to_vec());
}

#[test]
fn resubscription_cancels_the_previous_upstream_and_requests_outstanding_demand() {
  let source = TestSource::new();
  let receiver = ArcShared::new(Recorder::new().with_initial_demand(Demand::Finite(5)));
  let sink = bridge(&source, &receiver);
  source.emit_all([1, 2]);

  Sink::subscribe_to(&sink, &source);
  assert!(source.is_cancelled(0));
  assert_eq!(source.requests(1), [Demand::Finite(3)].to_vec());

  source.emit(3);
  assert_eq!(receiver.values(), [1, 2, 3].to_vec());
}

#[test]
fn replaced_subscription_is_cancelled_exactly_once() {
  let receiver = ArcShared::new(Recorder::new());
  let sink = Sink::passthrough(downstream(&receiver));
  let first = ArcShared::new(CountingSubscription::default());
  let second = ArcShared::new(CountingSubscription::default());
  sink.demand(Demand::Finite(4));

  sink.receive_subscription(first.clone().into_dyn(|inner| inner as Arc<dyn Subscription>));
  sink.receive_subscription(second.clone().into_dyn(|inner| inner as Arc<dyn Subscription>));
  sink.cancel();
  sink.cancel();

  assert_eq!(first.cancels.load(Ordering::SeqCst), 1);
  assert_eq!(second.cancels.load(Ordering::SeqCst), 1);
  assert_eq!(*first.requests.lock(), [Demand::Finite(4)].to_vec());
  assert_eq!(*second.requests.lock(), [Demand::Finite(4)].to_vec());
}

#[test]
fn cancelled_sink_rejects_new_subscriptions_and_drops_signals() {
  let receiver = ArcShared::new(Recorder::new().with_initial_demand(Demand::Unbounded));
  let sink = Sink::passthrough(downstream(&receiver));
  sink.cancel();

  let late = ArcShared::new(CountingSubscription::default());
  sink.receive_subscription(late.clone().into_dyn(|inner| inner as Arc<dyn Subscription>));
  assert_eq!(late.cancels.load(Ordering::SeqCst), 1);
  assert!(late.requests.lock().is_empty());

  assert_eq!(sink.receive_value(1), Demand::NONE);
  sink.receive_completion(Completion::Finished);
  assert!(receiver.signals().is_empty());
}

#[test]
fn terminal_signal_is_delivered_once_and_detaches_upstream() {
  let source = TestSource::new();
  let receiver = ArcShared::new(Recorder::new().with_initial_demand(Demand::Unbounded));
  let sink = bridge(&source, &receiver);
  source.emit(1);
  source.complete(Completion::Failure("boom"));

  sink.receive_completion(Completion::Finished);
  assert_eq!(sink.receive_value(2), Demand::NONE);
  sink.terminate(Completion::Finished);

  assert!(sink.is_cancelled());
  assert!(source.is_cancelled(0));
  assert_eq!(receiver.signals(), [
    RecordedSignal::Subscribed,
    RecordedSignal::Value(1),
    RecordedSignal::Completion(Completion::Failure("boom"))
  ]
  .to_vec());
}

#[test]
fn transforms_filter_values_and_swallow_failures() {
  let source = TestSource::new();
  let receiver = ArcShared::new(Recorder::new().with_initial_demand(Demand::Unbounded));
  let forwarding = TransformForwarding::new()
    .with_value(|value: u32| (value % 2 == 0).then_some(value))
    .with_failure(|error: &'static str| (error != "transient").then_some(error));
  let sink = Sink::bridge(&source, downstream(&receiver), Box::new(forwarding));

  source.emit_all([1, 2, 3, 4]);
  source.complete(Completion::Failure("transient"));
  assert!(!sink.is_cancelled());
  assert!(!receiver.is_completed());

  Sink::subscribe_to(&sink, &source);
  source.emit(6);
  source.complete(Completion::Failure("fatal"));
  assert_eq!(receiver.values(), [2, 4, 6].to_vec());
  assert_eq!(receiver.completions(), [Completion::Failure("fatal")].to_vec());
}

#[test]
fn synchronous_upstream_can_reenter_the_sink() {
  let receiver = ArcShared::new(
    Recorder::new().with_initial_demand(Demand::Finite(1)).with_reentrant_request(Demand::Finite(1)),
  );
  let sink = Sink::bridge(&RangeSource { end: 5 }, downstream(&receiver), Box::new(TransformForwarding::identity()));

  assert_eq!(receiver.values(), [0, 1, 2, 3, 4].to_vec());
  assert_eq!(receiver.completions(), [Completion::Finished].to_vec());
  assert!(sink.is_cancelled());
}

#[test]
fn concurrent_cancels_cancel_the_upstream_once() {
  const THREADS: usize = 8;
  let receiver = ArcShared::new(Recorder::new());
  let sink = ArcShared::new(Sink::passthrough(downstream(&receiver)));
  let upstream = ArcShared::new(CountingSubscription::default());
  sink.receive_subscription(upstream.clone().into_dyn(|inner| inner as Arc<dyn Subscription>));
  let barrier = ArcShared::new(Barrier::new(THREADS));

  let workers: Vec<_> = (0..THREADS)
    .map(|_| {
      let sink = sink.clone();
      let barrier = barrier.clone();
      thread::spawn(move || {
        barrier.wait();
        Subscription::cancel(&*sink);
      })
    })
    .collect();
  for worker in workers {
    worker.join().expect("worker");
  }

  assert_eq!(upstream.cancels.load(Ordering::SeqCst), 1);
  assert!(sink.is_cancelled());
}

#[test]
fn cancelling_after_termination_suppresses_buffered_signals() {
  let source = TestSource::new();
  let receiver = ArcShared::new(Recorder::new());
  let sink = bridge(&source, &receiver);
  source.emit_all([1, 2, 3]);
  source.complete(Completion::Finished);
  assert!(sink.is_cancelled());
  assert_eq!(sink.buffer().len(), 3);

  Subscription::cancel(&*sink);
  Subscription::request(&*sink, Demand::Finite(5));

  assert!(sink.buffer().is_discarded());
  assert_eq!(receiver.signals(), [RecordedSignal::Subscribed].to_vec());
}

#[test]
fn cancelling_from_inside_a_delivery_stops_further_signals() {
  let source = TestSource::new();
  let receiver = ArcShared::new(Recorder::new().cancelling_after(1));
  let sink = bridge(&source, &receiver);
  source.emit_all([1, 2, 3]);
  source.complete(Completion::Finished);

  Subscription::request(&*sink, Demand::Unbounded);

  assert_eq!(receiver.values(), [1].to_vec());
  assert!(receiver.completions().is_empty());
  assert!(sink.is_cancelled());
}

#[test]
fn zero_request_before_any_demand_does_not_release_the_terminal_signal() {
  let source = TestSource::new();
  let receiver = ArcShared::new(Recorder::new());
  let sink = bridge(&source, &receiver);
  source.complete(Completion::Finished);

  receiver.request(Demand::NONE);
  assert!(!receiver.is_completed());
  assert!(!sink.buffer().is_terminated());

  receiver.request(Demand::Finite(1));
  assert_eq!(receiver.completions(), [Completion::Finished].to_vec());
}
