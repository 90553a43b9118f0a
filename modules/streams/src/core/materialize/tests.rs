use alloc::sync::Arc;
use core::convert::Infallible;

use flowlatch_utils_rs::{core::sync::ArcShared, std::runtime_toolbox::StdToolbox};

use super::MaterializeGeneric;
use crate::core::{
  Completion, Demand, Receiver, Source, StreamEvent,
  testing::{TestReceiver, TestSource},
};

type Events = TestReceiver<StreamEvent<u32, &'static str>, Infallible>;

fn materialize(source: &TestSource<u32, &'static str>, receiver: &ArcShared<Events>) {
  let upstream = ArcShared::new(source.clone()).into_dyn(|inner| inner as Arc<dyn Source<u32, &'static str>>);
  MaterializeGeneric::<u32, &'static str, StdToolbox>::new(upstream)
    .subscribe(receiver.clone().into_dyn(|inner| inner as Arc<dyn Receiver<StreamEvent<u32, &'static str>, Infallible>>));
}

#[test]
fn failure_becomes_the_last_event() {
  let source = TestSource::new();
  let receiver = ArcShared::new(Events::new().with_initial_demand(Demand::Unbounded));
  materialize(&source, &receiver);
  source.emit_all([1, 2]);
  source.complete(Completion::Failure("boom"));

  assert_eq!(receiver.values(), [StreamEvent::Value(1), StreamEvent::Value(2), StreamEvent::Failure("boom")].to_vec());
  assert_eq!(receiver.completions(), [Completion::Finished].to_vec());
}

#[test]
fn finish_event_respects_demand() {
  let source = TestSource::new();
  let receiver = ArcShared::new(Events::new().with_initial_demand(Demand::Finite(1)));
  materialize(&source, &receiver);
  source.emit(7);
  source.complete(Completion::Finished);

  assert_eq!(receiver.values(), [StreamEvent::Value(7)].to_vec());
  assert!(!receiver.is_completed());

  receiver.request(Demand::Finite(1));
  assert_eq!(receiver.values(), [StreamEvent::Value(7), StreamEvent::Finished].to_vec());
  assert_eq!(receiver.completions(), [Completion::Finished].to_vec());
}
