use alloc::boxed::Box;
use core::marker::PhantomData;

use flowlatch_utils_rs::core::{runtime_toolbox::RuntimeToolbox, sync::ArcShared};

use super::{
  Completion, CompletionForwarding, Forwarding, Receiver, SinkGeneric, Source, StreamEvent, ValueForwarding,
};


/// Turns a stream of [`StreamEvent`]s back into values and a terminal signal.
///
/// The first terminal event ends the stream; a terminal signal of the upstream itself is
/// forwarded as is.
pub struct DematerializeGeneric<T, E, TB: RuntimeToolbox> {
  upstream: ArcShared<dyn Source<StreamEvent<T, E>, E>>,
  _toolbox: PhantomData<TB>,
}

struct DematerializeForwarding;

impl<T, E, TB: RuntimeToolbox> DematerializeGeneric<T, E, TB> {
  /// Creates the operator.
  #[must_use]
  pub const fn new(upstream: ArcShared<dyn Source<StreamEvent<T, E>, E>>) -> Self {
    Self { upstream, _toolbox: PhantomData }
  }
}

impl<T, E> Forwarding<StreamEvent<T, E>, E, T, E> for DematerializeForwarding {
  fn forward_value(&self, event: StreamEvent<T, E>) -> ValueForwarding<T, E> {
    match event {
      | StreamEvent::Value(value) => ValueForwarding::Emit(value),
      | StreamEvent::Failure(error) => ValueForwarding::Complete(Completion::Failure(error)),
      | StreamEvent::Finished => ValueForwarding::Complete(Completion::Finished),
    }
  }

  fn forward_completion(&self, completion: Completion<E>) -> CompletionForwarding<T, E> {
    CompletionForwarding::Complete(completion)
  }
}

impl<T, E, TB> Source<T, E> for DematerializeGeneric<T, E, TB>
where
  T: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  fn subscribe(&self, receiver: ArcShared<dyn Receiver<T, E>>) {
    SinkGeneric::<StreamEvent<T, E>, E, T, E, TB>::bridge(&*self.upstream, receiver, Box::new(DematerializeForwarding));
  }
}
