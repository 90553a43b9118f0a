use super::{Completion, CompletionForwarding, ValueForwarding};

/// Forwarding policy injected into a [`SinkGeneric`](super::SinkGeneric).
///
/// A policy only decides what should happen; the sink performs the buffer interaction, so the
/// rules "never buffer after the terminal signal" and "complete at most once" hold whatever
/// policy is installed.
pub trait Forwarding<In, InErr, Out, OutErr>: Send + Sync {
  /// Decides how an upstream value is forwarded.
  fn forward_value(&self, value: In) -> ValueForwarding<Out, OutErr>;

  /// Decides how the upstream terminal signal is forwarded.
  fn forward_completion(&self, completion: Completion<InErr>) -> CompletionForwarding<Out, OutErr>;
}
