use alloc::boxed::Box;

use super::{Completion, CompletionForwarding, Forwarding, ValueForwarding};


type ValueTransform<In, Out> = Box<dyn Fn(In) -> Option<Out> + Send + Sync>;
type FailureTransform<InErr, OutErr> = Box<dyn Fn(InErr) -> Option<OutErr> + Send + Sync>;

/// Default forwarding policy built from two optional transforms.
///
/// The value transform maps a value or filters it out (`None`). The failure transform maps a
/// failure or swallows it (`None`), leaving the sink free to be resubscribed. A successful
/// completion is always forwarded as is.
pub struct TransformForwarding<In, InErr, Out, OutErr> {
  value:   Option<ValueTransform<In, Out>>,
  failure: Option<FailureTransform<InErr, OutErr>>,
}

impl<In, InErr, Out, OutErr> TransformForwarding<In, InErr, Out, OutErr> {
  /// Creates a policy without transforms.
  ///
  /// Using it before installing the transforms it needs is a programming error and panics.
  #[must_use]
  pub const fn new() -> Self {
    Self { value: None, failure: None }
  }

  /// Installs the value transform.
  #[must_use]
  pub fn with_value<F>(mut self, transform: F) -> Self
  where
    F: Fn(In) -> Option<Out> + Send + Sync + 'static, {
    self.value = Some(Box::new(transform));
    self
  }

  /// Installs the failure transform.
  #[must_use]
  pub fn with_failure<F>(mut self, transform: F) -> Self
  where
    F: Fn(InErr) -> Option<OutErr> + Send + Sync + 'static, {
    self.failure = Some(Box::new(transform));
    self
  }
}

impl<T, E> TransformForwarding<T, E, T, E>
where
  T: Send + 'static,
  E: Send + 'static,
{
  /// Forwards values and failures unchanged.
  #[must_use]
  pub fn identity() -> Self {
    Self::new().with_value(Some).with_failure(Some)
  }
}

impl<In, InErr, Out, OutErr> Default for TransformForwarding<In, InErr, Out, OutErr> {
  fn default() -> Self {
    Self::new()
  }
}

impl<In, InErr, Out, OutErr> Forwarding<In, InErr, Out, OutErr> for TransformForwarding<In, InErr, Out, OutErr> {
  fn forward_value(&self, value: In) -> ValueForwarding<Out, OutErr> {
    let Some(transform) = &self.value else {
      panic!("no value transform installed; supply one or use a dedicated forwarding policy");
    };
    match transform(value) {
      | Some(output) => ValueForwarding::Emit(output),
      | None => ValueForwarding::Drop,
    }
  }

  fn forward_completion(&self, completion: Completion<InErr>) -> CompletionForwarding<Out, OutErr> {
    let error = match completion {
      | Completion::Finished => return CompletionForwarding::Complete(Completion::Finished),
      | Completion::Failure(error) => error,
    };
    let Some(transform) = &self.failure else {
      panic!("no failure transform installed; supply one or use a dedicated forwarding policy");
    };
    match transform(error) {
      | Some(error) => CompletionForwarding::Complete(Completion::Failure(error)),
      | None => CompletionForwarding::Swallow,
    }
  }
}
