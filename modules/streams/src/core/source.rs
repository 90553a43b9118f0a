use flowlatch_utils_rs::core::sync::ArcShared;

use super::Receiver;

/// Producer side of the stream protocol.
pub trait Source<T, E>: Send + Sync {
  /// Attaches `receiver`, which is handed a subscription before anything else.
  fn subscribe(&self, receiver: ArcShared<dyn Receiver<T, E>>);
}
