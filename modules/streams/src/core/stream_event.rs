use super::Completion;

/// Value or terminal signal reified as an ordinary stream element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent<T, E> {
  /// A regular value.
  Value(T),
  /// The stream failed.
  Failure(E),
  /// The stream finished.
  Finished,
}

impl<T, E> StreamEvent<T, E> {
  /// Returns `true` for the two terminal variants.
  #[must_use]
  pub const fn is_terminal(&self) -> bool {
    !matches!(self, Self::Value(_))
  }
}

impl<T, E> From<Completion<E>> for StreamEvent<T, E> {
  fn from(completion: Completion<E>) -> Self {
    match completion {
      | Completion::Finished => Self::Finished,
      | Completion::Failure(error) => Self::Failure(error),
    }
  }
}
