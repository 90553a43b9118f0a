use alloc::{boxed::Box, vec::Vec};
use core::time::Duration;

use flowlatch_utils_rs::core::sync::{ArcShared, sync_mutex_like::SpinSyncMutex};

use super::ManualScheduler;
use crate::core::{ScheduleOptions, Scheduler};

type Log = ArcShared<SpinSyncMutex<Vec<&'static str>>>;

fn logger(log: &Log, entry: &'static str) -> Box<dyn FnOnce() + Send> {
  let log = log.clone();
  Box::new(move || log.lock().push(entry))
}

#[test]
fn nothing_runs_until_driven() {
  let scheduler = ManualScheduler::new();
  let log = Log::new(SpinSyncMutex::new(Vec::new()));
  scheduler.schedule(ScheduleOptions::new(), logger(&log, "a"));

  assert!(log.lock().is_empty());
  assert_eq!(scheduler.pending_count(), 1);
  assert_eq!(scheduler.run_pending(), 1);
  assert_eq!(*log.lock(), ["a"].to_vec());
}

#[test]
fn delayed_actions_run_in_due_order() {
  let scheduler = ManualScheduler::new();
  let log = Log::new(SpinSyncMutex::new(Vec::new()));
  scheduler.schedule_after(Duration::from_millis(20), logger(&log, "late"));
  scheduler.schedule_after(Duration::from_millis(10), logger(&log, "early"));
  scheduler.schedule(ScheduleOptions::new(), logger(&log, "now"));

  assert_eq!(scheduler.advance_by(Duration::from_millis(10)), 2);
  assert_eq!(*log.lock(), ["now", "early"].to_vec());
  assert_eq!(scheduler.now(), Duration::from_millis(10));

  scheduler.advance_by(Duration::from_millis(10));
  assert_eq!(*log.lock(), ["now", "early", "late"].to_vec());
  assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn actions_scheduled_while_running_are_picked_up() {
  let scheduler = ArcShared::new(ManualScheduler::new());
  let log = Log::new(SpinSyncMutex::new(Vec::new()));
  let inner_scheduler = scheduler.clone();
  let inner_log = log.clone();
  scheduler.schedule(
    ScheduleOptions::new(),
    Box::new(move || {
      inner_log.lock().push("outer");
      inner_scheduler.schedule(ScheduleOptions::new(), logger(&inner_log, "inner"));
    }),
  );

  assert_eq!(scheduler.run_pending(), 2);
  assert_eq!(*log.lock(), ["outer", "inner"].to_vec());
}

#[test]
fn repeating_actions_stop_when_cancelled() {
  let scheduler = ManualScheduler::new();
  let ticks = ArcShared::new(SpinSyncMutex::new(0_u32));
  let counter = ticks.clone();
  let handle = scheduler.schedule_repeating(
    Duration::from_millis(5),
    Duration::from_millis(10),
    Box::new(move || *counter.lock() += 1),
  );

  scheduler.advance_by(Duration::from_millis(4));
  assert_eq!(*ticks.lock(), 0);
  scheduler.advance_by(Duration::from_millis(21));
  assert_eq!(*ticks.lock(), 3);

  handle.cancel();
  scheduler.advance_by(Duration::from_millis(100));
  assert_eq!(*ticks.lock(), 3);
  assert_eq!(scheduler.pending_count(), 0);
}
