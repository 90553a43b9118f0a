#[cfg(test)]
mod tests;

/// Terminal signal of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion<E> {
  /// The stream finished successfully.
  Finished,
  /// The stream failed with the provided error.
  Failure(E),
}

impl<E> Completion<E> {
  /// Returns `true` for a successful completion.
  #[must_use]
  pub const fn is_finished(&self) -> bool {
    matches!(self, Self::Finished)
  }

  /// Returns `true` for a failed completion.
  #[must_use]
  pub const fn is_failure(&self) -> bool {
    matches!(self, Self::Failure(_))
  }

  /// Borrows the failure, if any.
  #[must_use]
  pub const fn failure(&self) -> Option<&E> {
    match self {
      | Self::Finished => None,
      | Self::Failure(error) => Some(error),
    }
  }

  /// Maps the failure type, leaving `Finished` untouched.
  pub fn map_failure<F, E2>(self, f: F) -> Completion<E2>
  where
    F: FnOnce(E) -> E2, {
    match self {
      | Self::Finished => Completion::Finished,
      | Self::Failure(error) => Completion::Failure(f(error)),
    }
  }

  /// Converts the completion into a `Result`.
  ///
  /// # Errors
  ///
  /// Returns the failure carried by [`Completion::Failure`].
  pub fn into_result(self) -> Result<(), E> {
    match self {
      | Self::Finished => Ok(()),
      | Self::Failure(error) => Err(error),
    }
  }
}

impl<E> From<Result<(), E>> for Completion<E> {
  fn from(result: Result<(), E>) -> Self {
    match result {
      | Ok(()) => Self::Finished,
      | Err(error) => Self::Failure(error),
    }
  }
}
