use alloc::sync::Arc;
use core::time::Duration;

use flowlatch_utils_rs::core::sync::ArcShared;

use super::{CancelFlag, Cancellable, RepeatingAction, ScheduleOptions, ScheduledAction, Scheduler};

#[cfg(test)]
mod tests;

/// Scheduler that runs every action synchronously on the calling thread.
///
/// Delays are ignored. A repeating action runs once and the returned handle is already
/// cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateScheduler;

impl ImmediateScheduler {
  /// Creates the scheduler.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Scheduler for ImmediateScheduler {
  fn schedule(&self, _options: ScheduleOptions, action: ScheduledAction) {
    action();
  }

  fn schedule_after(&self, _delay: Duration, action: ScheduledAction) {
    action();
  }

  fn schedule_repeating(
    &self,
    _delay: Duration,
    _interval: Duration,
    mut action: RepeatingAction,
  ) -> ArcShared<dyn Cancellable> {
    action();
    ArcShared::new(CancelFlag::cancelled()).into_dyn(|inner| inner as Arc<dyn Cancellable>)
  }
}
