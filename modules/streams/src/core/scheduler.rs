use alloc::boxed::Box;
use core::time::Duration;

use flowlatch_utils_rs::core::sync::ArcShared;

use super::{Cancellable, ScheduleOptions};

/// One-shot action handed to a [`Scheduler`].
pub type ScheduledAction = Box<dyn FnOnce() + Send>;

/// Repeating action handed to a [`Scheduler`].
pub type RepeatingAction = Box<dyn FnMut() + Send>;

/// Execution context that runs actions now or later, possibly on another thread.
///
/// Stream components only rely on this surface; how and where actions run is up to the
/// implementation.
pub trait Scheduler: Send + Sync {
  /// Runs `action` according to the scheduler's policy.
  fn schedule(&self, options: ScheduleOptions, action: ScheduledAction);

  /// Runs `action` once `delay` has elapsed.
  fn schedule_after(&self, delay: Duration, action: ScheduledAction);

  /// Runs `action` after `delay`, then every `interval`, until the returned handle is
  /// cancelled.
  fn schedule_repeating(&self, delay: Duration, interval: Duration, action: RepeatingAction) -> ArcShared<dyn Cancellable>;
}
