use crate::core::Completion;

/// Signal observed by a [`TestReceiver`](super::TestReceiver), in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedSignal<T, E> {
  /// A subscription was received.
  Subscribed,
  /// A value was received.
  Value(T),
  /// The terminal signal was received.
  Completion(Completion<E>),
}
