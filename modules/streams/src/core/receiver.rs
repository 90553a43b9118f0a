use flowlatch_utils_rs::core::sync::ArcShared;

use super::{Completion, Demand, Subscription};

/// Consumer side of the stream protocol.
///
/// A receiver gets exactly one subscription per subscribe attempt, then any number of values
/// (never more than it asked for) and at most one completion, after which nothing else is
/// delivered.
pub trait Receiver<T, E>: Send + Sync {
  /// Hands the receiver the subscription it uses to request values.
  fn receive_subscription(&self, subscription: ArcShared<dyn Subscription>);

  /// Delivers one value and returns the additional demand granted synchronously.
  fn receive_value(&self, value: T) -> Demand;

  /// Delivers the terminal signal.
  fn receive_completion(&self, completion: Completion<E>);
}
