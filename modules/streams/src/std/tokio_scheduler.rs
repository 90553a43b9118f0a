//! Scheduler running stream actions on a tokio runtime.

extern crate std;

use alloc::sync::Arc;
use core::{cmp, time::Duration};
use std::cell::Cell;

use flowlatch_utils_rs::core::sync::ArcShared;
use portable_atomic::{AtomicU64, Ordering};
use tokio::{
  runtime::Handle,
  task::AbortHandle,
  time::{Instant, MissedTickBehavior, interval_at, sleep},
};

use super::TokioSchedulerConfig;
use crate::core::{CancelFlag, Cancellable, RepeatingAction, ScheduleOptions, ScheduledAction, Scheduler, StreamError};

#[cfg(test)]
mod tests;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

static NEXT_SCHEDULER_ID: AtomicU64 = AtomicU64::new(1);

std::thread_local! {
  static CURRENT_SCHEDULER: Cell<Option<u64>> = const { Cell::new(None) };
}

/// Marks the current thread as running on a scheduler until dropped.
struct CurrentScope {
  previous: Option<u64>,
}

impl CurrentScope {
  fn enter(id: u64) -> Self {
    Self { previous: CURRENT_SCHEDULER.with(|current| current.replace(Some(id))) }
  }
}

impl Drop for CurrentScope {
  fn drop(&mut self) {
    CURRENT_SCHEDULER.with(|current| current.set(self.previous));
  }
}

fn run_on(id: u64, action: impl FnOnce()) {
  let _scope = CurrentScope::enter(id);
  action();
}

struct TokioRepeatingHandle {
  flag: ArcShared<CancelFlag>,
  task: AbortHandle,
}

impl Cancellable for TokioRepeatingHandle {
  fn cancel(&self) {
    if self.flag.trip() {
      self.task.abort();
    }
  }

  fn is_cancelled(&self) -> bool {
    self.flag.is_cancelled()
  }
}

/// [`Scheduler`] spawning actions onto a tokio runtime.
///
/// Clones share the same identity, so an action running on one clone counts as running on the
/// scheduler for all of them.
#[derive(Clone)]
pub struct TokioScheduler {
  handle: Handle,
  config: TokioSchedulerConfig,
  id:     u64,
}

impl TokioScheduler {
  /// Creates a scheduler spawning onto `handle`.
  #[must_use]
  pub fn new(handle: Handle) -> Self {
    Self::with_config(handle, TokioSchedulerConfig::default())
  }

  /// Creates a scheduler with an explicit configuration.
  #[must_use]
  pub fn with_config(handle: Handle, config: TokioSchedulerConfig) -> Self {
    Self { handle, config, id: NEXT_SCHEDULER_ID.fetch_add(1, Ordering::Relaxed) }
  }

  /// Creates a scheduler bound to the runtime the caller is running on.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::ExecutorUnavailable`] when called outside a tokio runtime.
  pub fn try_current() -> Result<Self, StreamError> {
    Handle::try_current().map(Self::new).map_err(|_| StreamError::ExecutorUnavailable)
  }

  /// Returns `true` when the caller is executing an action of this scheduler.
  #[must_use]
  pub fn is_current(&self) -> bool {
    CURRENT_SCHEDULER.with(|current| current.get() == Some(self.id))
  }

  /// Returns the configuration.
  #[must_use]
  pub const fn config(&self) -> &TokioSchedulerConfig {
    &self.config
  }
}

impl Scheduler for TokioScheduler {
  fn schedule(&self, options: ScheduleOptions, action: ScheduledAction) {
    let inline = options.inline_when_current() || self.config.inline_when_current();
    if inline && self.is_current() {
      action();
      return;
    }
    tracing::trace!(scheduler = self.config.label(), "spawning stream action");
    let id = self.id;
    self.handle.spawn(async move { run_on(id, action) });
  }

  fn schedule_after(&self, delay: Duration, action: ScheduledAction) {
    tracing::trace!(scheduler = self.config.label(), ?delay, "spawning delayed stream action");
    let id = self.id;
    self.handle.spawn(async move {
      sleep(delay).await;
      run_on(id, action);
    });
  }

  fn schedule_repeating(
    &self,
    delay: Duration,
    interval: Duration,
    mut action: RepeatingAction,
  ) -> ArcShared<dyn Cancellable> {
    let id = self.id;
    let flag = ArcShared::new(CancelFlag::new());
    let task_flag = flag.clone();
    let period = cmp::max(interval, MIN_INTERVAL);
    let task = self.handle.spawn(async move {
      let mut ticker = interval_at(Instant::now() + delay, period);
      ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
      loop {
        ticker.tick().await;
        if task_flag.is_cancelled() {
          break;
        }
        run_on(id, || action());
      }
    });
    tracing::trace!(scheduler = self.config.label(), ?delay, ?period, "started repeating stream action");
    let handle = TokioRepeatingHandle { flag, task: task.abort_handle() };
    ArcShared::new(handle).into_dyn(|inner| inner as Arc<dyn Cancellable>)
  }
}
