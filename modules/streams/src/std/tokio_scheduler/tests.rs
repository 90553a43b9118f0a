extern crate std;

use alloc::{boxed::Box, vec::Vec};
use core::time::Duration;
use std::{
  sync::{Arc, Mutex},
  time::Instant,
};

use tokio::sync::{mpsc, oneshot};

use super::TokioScheduler;
use crate::{
  core::{ScheduleOptions, Scheduler, StreamError},
  std::TokioSchedulerConfig,
};

#[test]
fn try_current_fails_outside_a_runtime() {
  assert_eq!(TokioScheduler::try_current().err(), Some(StreamError::ExecutorUnavailable));
}

#[tokio::test]
async fn actions_run_marked_as_current() {
  let scheduler = TokioScheduler::try_current().expect("runtime");
  let observer = scheduler.clone();
  let (tx, rx) = oneshot::channel();

  scheduler.schedule(ScheduleOptions::new(), Box::new(move || {
    let _ = tx.send(observer.is_current());
  }));

  assert!(rx.await.expect("action ran"));
  assert!(!scheduler.is_current());
}

#[tokio::test]
async fn other_schedulers_are_not_current() {
  let scheduler = TokioScheduler::try_current().expect("runtime");
  let other = TokioScheduler::try_current().expect("runtime");
  let (tx, rx) = oneshot::channel();

  scheduler.schedule(ScheduleOptions::new(), Box::new(move || {
    let _ = tx.send(other.is_current());
  }));

  assert!(!rx.await.expect("action ran"));
}

#[tokio::test]
async fn inline_option_runs_nested_actions_synchronously() {
  let scheduler = TokioScheduler::try_current().expect("runtime");
  let order = Arc::new(Mutex::new(Vec::new()));
  let (tx, rx) = oneshot::channel();

  let nested = scheduler.clone();
  let log = order.clone();
  scheduler.schedule(ScheduleOptions::new(), Box::new(move || {
    let inner_log = log.clone();
    nested.schedule(
      ScheduleOptions::new().with_inline_when_current(true),
      Box::new(move || inner_log.lock().expect("lock").push("inner")),
    );
    log.lock().expect("lock").push("outer");
    let _ = tx.send(());
  }));

  rx.await.expect("action ran");
  assert_eq!(*order.lock().expect("lock"), ["inner", "outer"].to_vec());
}

#[tokio::test]
async fn nested_actions_hop_by_default() {
  let scheduler = TokioScheduler::try_current().expect("runtime");
  let order = Arc::new(Mutex::new(Vec::new()));
  let (tx, rx) = oneshot::channel();

  let nested = scheduler.clone();
  let log = order.clone();
  scheduler.schedule(ScheduleOptions::new(), Box::new(move || {
    let inner_log = log.clone();
    nested.schedule(
      ScheduleOptions::new(),
      Box::new(move || {
        inner_log.lock().expect("lock").push("inner");
        let _ = tx.send(());
      }),
    );
    log.lock().expect("lock").push("outer");
  }));

  rx.await.expect("action ran");
  assert_eq!(*order.lock().expect("lock"), ["outer", "inner"].to_vec());
}

#[tokio::test]
async fn config_default_enables_inline_execution() {
  let config = TokioSchedulerConfig::new().with_inline_when_current(true);
  let scheduler = TokioScheduler::with_config(tokio::runtime::Handle::current(), config);
  let order = Arc::new(Mutex::new(Vec::new()));
  let (tx, rx) = oneshot::channel();

  let nested = scheduler.clone();
  let log = order.clone();
  scheduler.schedule(ScheduleOptions::new(), Box::new(move || {
    let inner_log = log.clone();
    nested.schedule(ScheduleOptions::new(), Box::new(move || inner_log.lock().expect("lock").push("inner")));
    log.lock().expect("lock").push("outer");
    let _ = tx.send(());
  }));

  rx.await.expect("action ran");
  assert_eq!(*order.lock().expect("lock"), ["inner", "outer"].to_vec());
}

#[tokio::test]
async fn delayed_actions_wait_for_the_delay() {
  let scheduler = TokioScheduler::try_current().expect("runtime");
  let (tx, rx) = oneshot::channel();
  let started = Instant::now();

  scheduler.schedule_after(Duration::from_millis(20), Box::new(move || {
    let _ = tx.send(Instant::now());
  }));

  let ran_at = rx.await.expect("action ran");
  assert!(ran_at.duration_since(started) >= Duration::from_millis(20));
}

#[tokio::test]
async fn repeating_actions_stop_once_cancelled() {
  let scheduler = TokioScheduler::try_current().expect("runtime");
  let (tx, mut rx) = mpsc::unbounded_channel();

  let handle = scheduler.schedule_repeating(
    Duration::ZERO,
    Duration::from_millis(5),
    Box::new(move || {
      let _ = tx.send(());
    }),
  );
  for _ in 0..3 {
    rx.recv().await.expect("tick");
  }
  handle.cancel();
  assert!(handle.is_cancelled());

  // the aborted task drops its sender, closing the channel
  while rx.recv().await.is_some() {}
}
