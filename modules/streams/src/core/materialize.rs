use alloc::boxed::Box;
use core::{convert::Infallible, marker::PhantomData};

use flowlatch_utils_rs::core::{runtime_toolbox::RuntimeToolbox, sync::ArcShared};

use super::{
  Completion, CompletionForwarding, Forwarding, Receiver, SinkGeneric, Source, StreamEvent, ValueForwarding,
};

#[cfg(test)]
mod tests;

/// Reifies values and the terminal signal as [`StreamEvent`]s.
///
/// The upstream terminal signal becomes one last event followed by a successful completion,
/// so the resulting stream never fails.
pub struct MaterializeGeneric<T, E, TB: RuntimeToolbox> {
  upstream: ArcShared<dyn Source<T, E>>,
  _toolbox: PhantomData<TB>,
}

struct MaterializeForwarding;

impl<T, E, TB: RuntimeToolbox> MaterializeGeneric<T, E, TB> {
  /// Creates the operator.
  #[must_use]
  pub const fn new(upstream: ArcShared<dyn Source<T, E>>) -> Self {
    Self { upstream, _toolbox: PhantomData }
  }
}

impl<T, E> Forwarding<T, E, StreamEvent<T, E>, Infallible> for MaterializeForwarding {
  fn forward_value(&self, value: T) -> ValueForwarding<StreamEvent<T, E>, Infallible> {
    ValueForwarding::Emit(StreamEvent::Value(value))
  }

  fn forward_completion(&self, completion: Completion<E>) -> CompletionForwarding<StreamEvent<T, E>, Infallible> {
    CompletionForwarding::EmitAndComplete(StreamEvent::from(completion), Completion::Finished)
  }
}

impl<T, E, TB> Source<StreamEvent<T, E>, Infallible> for MaterializeGeneric<T, E, TB>
where
  T: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  fn subscribe(&self, receiver: ArcShared<dyn Receiver<StreamEvent<T, E>, Infallible>>) {
    SinkGeneric::<T, E, StreamEvent<T, E>, Infallible, TB>::bridge(
      &*self.upstream,
      receiver,
      Box::new(MaterializeForwarding),
    );
  }
}
