/// Something that can be cancelled exactly once.
pub trait Cancellable: Send + Sync {
  /// Cancels the work. Calling it again has no effect.
  fn cancel(&self);

  /// Returns `true` once [`Cancellable::cancel`] has taken effect.
  fn is_cancelled(&self) -> bool;
}
