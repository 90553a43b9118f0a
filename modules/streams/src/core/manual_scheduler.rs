use alloc::{sync::Arc, vec::Vec};
use core::time::Duration;

use flowlatch_utils_rs::core::sync::{ArcShared, sync_mutex_like::SpinSyncMutex};

use super::{CancelFlag, Cancellable, RepeatingAction, ScheduleOptions, ScheduledAction, Scheduler};

#[cfg(test)]
mod tests;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

enum TaskKind {
  Once(ScheduledAction),
  Repeating { interval: Duration, action: RepeatingAction, handle: ArcShared<CancelFlag> },
}

struct ManualTask {
  due:  Duration,
  seq:  u64,
  kind: TaskKind,
}

struct ManualState {
  now:      Duration,
  next_seq: u64,
  tasks:    Vec<ManualTask>,
}

impl ManualState {
  fn push(&mut self, due: Duration, kind: TaskKind) {
    let seq = self.next_seq;
    self.next_seq += 1;
    self.tasks.push(ManualTask { due, seq, kind });
  }

  fn pop_due(&mut self) -> Option<ManualTask> {
    let now = self.now;
    let index = self
      .tasks
      .iter()
      .enumerate()
      .filter(|(_, task)| task.due <= now)
      .min_by_key(|(_, task)| (task.due, task.seq))
      .map(|(index, _)| index)?;
    Some(self.tasks.swap_remove(index))
  }
}

/// Virtual-time scheduler driven explicitly by the caller.
///
/// Nothing runs until [`run_pending`](Self::run_pending) or [`advance_by`](Self::advance_by)
/// is called, which makes interleavings reproducible in tests. Actions run in due-time order,
/// ties broken by submission order. Schedule options are ignored: every action is queued.
pub struct ManualScheduler {
  state: SpinSyncMutex<ManualState>,
}

impl ManualScheduler {
  /// Creates a scheduler at virtual time zero.
  #[must_use]
  pub const fn new() -> Self {
    Self { state: SpinSyncMutex::new(ManualState { now: Duration::ZERO, next_seq: 0, tasks: Vec::new() }) }
  }

  /// Current virtual time.
  #[must_use]
  pub fn now(&self) -> Duration {
    self.state.lock().now
  }

  /// Number of queued actions, due or not.
  #[must_use]
  pub fn pending_count(&self) -> usize {
    self.state.lock().tasks.len()
  }

  /// Runs every action due at the current virtual time, including actions they schedule for
  /// the same instant. Returns the number of actions run.
  pub fn run_pending(&self) -> usize {
    let mut executed = 0;
    loop {
      let Some(task) = self.state.lock().pop_due() else {
        return executed;
      };
      match task.kind {
        | TaskKind::Once(action) => {
          executed += 1;
          action();
        },
        | TaskKind::Repeating { interval, mut action, handle } => {
          if handle.is_cancelled() {
            continue;
          }
          executed += 1;
          action();
          if !handle.is_cancelled() {
            self.state.lock().push(task.due + interval, TaskKind::Repeating { interval, action, handle });
          }
        },
      }
    }
  }

  /// Moves virtual time forward by `delta`, then runs everything that became due.
  pub fn advance_by(&self, delta: Duration) -> usize {
    {
      let mut state = self.state.lock();
      state.now += delta;
    }
    self.run_pending()
  }
}

impl Default for ManualScheduler {
  fn default() -> Self {
    Self::new()
  }
}

impl Scheduler for ManualScheduler {
  fn schedule(&self, _options: ScheduleOptions, action: ScheduledAction) {
    let mut state = self.state.lock();
    let now = state.now;
    state.push(now, TaskKind::Once(action));
  }

  fn schedule_after(&self, delay: Duration, action: ScheduledAction) {
    let mut state = self.state.lock();
    let due = state.now + delay;
    state.push(due, TaskKind::Once(action));
  }

  fn schedule_repeating(&self, delay: Duration, interval: Duration, action: RepeatingAction) -> ArcShared<dyn Cancellable> {
    let handle = ArcShared::new(CancelFlag::new());
    let interval = interval.max(MIN_INTERVAL);
    {
      let mut state = self.state.lock();
      let due = state.now + delay;
      state.push(due, TaskKind::Repeating { interval, action, handle: handle.clone() });
    }
    handle.into_dyn(|inner| inner as Arc<dyn Cancellable>)
  }
}
