use alloc::boxed::Box;
use core::time::Duration;

use flowlatch_utils_rs::core::sync::ArcShared;
use portable_atomic::{AtomicUsize, Ordering};

use super::ImmediateScheduler;
use crate::core::{ScheduleOptions, Scheduler};

#[test]
fn actions_run_before_schedule_returns() {
  let scheduler = ImmediateScheduler::new();
  let runs = ArcShared::new(AtomicUsize::new(0));

  let counter = runs.clone();
  scheduler.schedule(ScheduleOptions::new(), Box::new(move || {
    counter.fetch_add(1, Ordering::SeqCst);
  }));
  let counter = runs.clone();
  scheduler.schedule_after(Duration::from_secs(60), Box::new(move || {
    counter.fetch_add(1, Ordering::SeqCst);
  }));

  assert_eq!(runs.load(Ordering::SeqCst), 2);
}

#[test]
fn repeating_action_runs_once() {
  let scheduler = ImmediateScheduler::new();
  let runs = ArcShared::new(AtomicUsize::new(0));
  let counter = runs.clone();
  let handle = scheduler.schedule_repeating(
    Duration::ZERO,
    Duration::from_millis(1),
    Box::new(move || {
      counter.fetch_add(1, Ordering::SeqCst);
    }),
  );

  assert_eq!(runs.load(Ordering::SeqCst), 1);
  assert!(handle.is_cancelled());
}
