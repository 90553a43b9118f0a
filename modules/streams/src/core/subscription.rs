use super::Demand;

/// Handle through which a receiver pulls values from, or detaches from, a source.
pub trait Subscription: Send + Sync {
  /// Requests `demand` additional values. Requesting [`Demand::NONE`] is a no-op.
  fn request(&self, demand: Demand);

  /// Stops the flow of signals. Idempotent.
  fn cancel(&self);
}
