use alloc::{boxed::Box, sync::Arc};
use core::marker::PhantomData;

use flowlatch_utils_rs::core::{runtime_toolbox::RuntimeToolbox, sync::ArcShared};

use super::{Completion, CompletionForwarding, Forwarding, Receiver, SinkGeneric, Source, ValueForwarding};


type Predicate<T> = ArcShared<dyn Fn(&T) -> bool + Send + Sync>;

/// Forwards values while a predicate holds, then finishes.
///
/// With `inclusive` set, the first value failing the predicate is still forwarded before the
/// stream finishes.
pub struct PrefixWhileGeneric<T, E, TB: RuntimeToolbox> {
  upstream:  ArcShared<dyn Source<T, E>>,
  predicate: Predicate<T>,
  inclusive: bool,
  _toolbox:  PhantomData<TB>,
}

struct PrefixWhileForwarding<T> {
  predicate: Predicate<T>,
  inclusive: bool,
}

impl<T, E, TB: RuntimeToolbox> PrefixWhileGeneric<T, E, TB> {
  /// Creates the operator; the failing value is not forwarded.
  #[must_use]
  pub fn new<P>(upstream: ArcShared<dyn Source<T, E>>, predicate: P) -> Self
  where
    P: Fn(&T) -> bool + Send + Sync + 'static, {
    let predicate = ArcShared::new(predicate).into_dyn(|inner| inner as Arc<dyn Fn(&T) -> bool + Send + Sync>);
    Self { upstream, predicate, inclusive: false, _toolbox: PhantomData }
  }

  /// Also forwards the first value that fails the predicate.
  #[must_use]
  pub const fn inclusive(mut self) -> Self {
    self.inclusive = true;
    self
  }
}

impl<T, E> Forwarding<T, E, T, E> for PrefixWhileForwarding<T> {
  fn forward_value(&self, value: T) -> ValueForwarding<T, E> {
    match ((self.predicate)(&value), self.inclusive) {
      | (true, _) => ValueForwarding::Emit(value),
      | (false, true) => ValueForwarding::EmitAndComplete(value, Completion::Finished),
      | (false, false) => ValueForwarding::Complete(Completion::Finished),
    }
  }

  fn forward_completion(&self, completion: Completion<E>) -> CompletionForwarding<T, E> {
    CompletionForwarding::Complete(completion)
  }
}

impl<T, E, TB> Source<T, E> for PrefixWhileGeneric<T, E, TB>
where
  T: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  fn subscribe(&self, receiver: ArcShared<dyn Receiver<T, E>>) {
    let forwarding = PrefixWhileForwarding { predicate: self.predicate.clone(), inclusive: self.inclusive };
    SinkGeneric::<T, E, T, E, TB>::bridge(&*self.upstream, receiver, Box::new(forwarding));
  }
}
