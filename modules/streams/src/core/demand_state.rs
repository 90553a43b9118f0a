//! Requested, processed and forwarded demand counters.

use super::Demand;


/// Demand bookkeeping shared between a downstream receiver and the upstream it pulls from.
///
/// Three counters are tracked instead of one so that demand granted synchronously from inside
/// a delivery callback is neither double counted nor forgotten: `requested` is everything the
/// downstream ever asked for, `processed` is what has been delivered and `sent` is what has
/// already been forwarded to the current upstream. `processed <= requested` and
/// `sent <= requested` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemandState {
  requested: Demand,
  processed: Demand,
  sent:      Demand,
}

impl DemandState {
  /// Creates an empty state.
  #[must_use]
  pub const fn new() -> Self {
    Self { requested: Demand::NONE, processed: Demand::NONE, sent: Demand::NONE }
  }

  /// Total demand ever requested by the downstream.
  #[must_use]
  pub const fn requested(&self) -> Demand {
    self.requested
  }

  /// Number of values already delivered.
  #[must_use]
  pub const fn processed(&self) -> Demand {
    self.processed
  }

  /// Demand already communicated to the current upstream.
  #[must_use]
  pub const fn sent(&self) -> Demand {
    self.sent
  }

  /// Demand granted by the downstream but not yet fulfilled.
  #[must_use]
  pub const fn outstanding(&self) -> Demand {
    self.requested.saturating_sub(self.processed)
  }

  /// Returns `true` when another value may be delivered.
  #[must_use]
  pub fn can_deliver(&self) -> bool {
    self.processed < self.requested
  }

  pub(crate) fn add_requested(&mut self, demand: Demand) {
    self.requested += demand;
  }

  pub(crate) fn record_processed(&mut self) {
    self.processed += Demand::Finite(1);
  }

  /// Starts accounting against a fresh upstream and returns what it must be asked for.
  pub(crate) fn mark_attached(&mut self) -> Demand {
    self.sent = self.requested;
    self.outstanding()
  }

  /// Returns the demand not yet forwarded upstream and marks it as forwarded.
  pub(crate) fn take_unsent(&mut self) -> Demand {
    let unsent = self.requested.saturating_sub(self.sent);
    self.sent = self.requested;
    unsent
  }

  pub(crate) fn reset(&mut self) {
    *self = Self::new();
  }
}
