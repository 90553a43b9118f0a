use portable_atomic::{AtomicBool, Ordering};

use super::Cancellable;


/// Lock-free [`Cancellable`] backed by an atomic flag.
///
/// Returned by schedulers for repeating work, which polls the flag before every run.
#[derive(Debug, Default)]
pub struct CancelFlag {
  cancelled: AtomicBool,
}

impl CancelFlag {
  /// Creates a flag that is not cancelled.
  #[must_use]
  pub const fn new() -> Self {
    Self { cancelled: AtomicBool::new(false) }
  }

  /// Creates a flag that is already cancelled.
  #[must_use]
  pub const fn cancelled() -> Self {
    Self { cancelled: AtomicBool::new(true) }
  }

  /// Sets the flag, returning `true` only for the call that flipped it.
  pub fn trip(&self) -> bool {
    !self.cancelled.swap(true, Ordering::AcqRel)
  }
}

impl Cancellable for CancelFlag {
  fn cancel(&self) {
    self.trip();
  }

  fn is_cancelled(&self) -> bool {
    self.cancelled.load(Ordering::Acquire)
  }
}
