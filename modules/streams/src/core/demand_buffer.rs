//! Backpressure buffer between an upstream producer and a downstream receiver.

use alloc::collections::VecDeque;
use core::mem;

use flowlatch_utils_rs::core::{
  runtime_toolbox::{RuntimeToolbox, SyncMutexFamily, ToolboxMutex},
  sync::{ArcShared, sync_mutex_like::SyncMutexLike},
};

use super::{Completion, Demand, DemandBufferConfig, DemandState, Receiver};


enum Terminal<E> {
  Open,
  Pending(Completion<E>),
  Delivered,
  Discarded,
}

impl<E> Terminal<E> {
  const fn is_open(&self) -> bool {
    matches!(self, Self::Open)
  }

  const fn is_closed(&self) -> bool {
    matches!(self, Self::Delivered | Self::Discarded)
  }

  fn take_pending(&mut self) -> Option<Completion<E>> {
    match mem::replace(self, Self::Delivered) {
      | Self::Pending(completion) => Some(completion),
      | other => {
        *self = other;
        None
      },
    }
  }
}

struct BufferState<T, E> {
  queue:    VecDeque<T>,
  terminal: Terminal<E>,
  demand:   DemandState,
  draining: bool,
}

/// Reconciles downstream demand with buffered values and a pending terminal signal.
///
/// Values are delivered in arrival order and never beyond the requested demand; the terminal
/// signal is delivered at most once, after every buffered value. The receiver is always
/// invoked with the lock released. A `draining` marker lets only one caller run the delivery
/// loop at a time: demand added concurrently, or reentrantly from inside a delivery callback,
/// is recorded and picked up by the active drainer before it returns. A discarded buffer
/// delivers nothing more.
pub struct DemandBufferGeneric<T, E, TB: RuntimeToolbox>
where
  T: Send + 'static,
  E: Send + 'static, {
  receiver: ArcShared<dyn Receiver<T, E>>,
  state:    ToolboxMutex<BufferState<T, E>, TB>,
}

impl<T, E, TB> DemandBufferGeneric<T, E, TB>
where
  T: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  /// Creates a buffer delivering to `receiver`.
  #[must_use]
  pub fn new(receiver: ArcShared<dyn Receiver<T, E>>) -> Self {
    Self::with_config(receiver, DemandBufferConfig::default())
  }

  /// Creates a buffer with an explicit configuration.
  #[must_use]
  pub fn with_config(receiver: ArcShared<dyn Receiver<T, E>>, config: DemandBufferConfig) -> Self {
    let state = BufferState {
      queue:    VecDeque::with_capacity(config.initial_capacity()),
      terminal: Terminal::Open,
      demand:   DemandState::new(),
      draining: false,
    };
    Self { receiver, state: <TB::MutexFamily as SyncMutexFamily>::create(state) }
  }

  /// Prepares the buffer for a new upstream subscription.
  ///
  /// Returns the demand already granted by the downstream but not yet fulfilled; the caller
  /// must request exactly that much from the new upstream.
  pub fn attach_to_new_upstream(&self) -> Demand {
    self.state.lock().demand.mark_attached()
  }

  /// Accepts a value from the upstream and returns the demand to forward upstream.
  ///
  /// # Panics
  ///
  /// Panics when a terminal signal has already been recorded.
  pub fn buffer(&self, value: T) -> Demand {
    match self.try_buffer(value) {
      | Ok(demand) => demand,
      | Err(_) => panic!("value buffered after the terminal signal was recorded"),
    }
  }

  /// Records the terminal signal and delivers it as soon as the queue has drained.
  ///
  /// Ignored once the buffer was discarded.
  ///
  /// # Panics
  ///
  /// Panics when a terminal signal has already been recorded.
  pub fn complete(&self, completion: Completion<E>) -> Demand {
    {
      let mut state = self.state.lock();
      if matches!(state.terminal, Terminal::Discarded) {
        return Demand::NONE;
      }
      assert!(state.terminal.is_open(), "terminal signal recorded twice");
      state.terminal = Terminal::Pending(completion);
    }
    self.flush(None)
  }

  /// Adds downstream demand and returns the demand to forward upstream.
  pub fn demand(&self, demand: Demand) -> Demand {
    self.flush(Some(demand))
  }

  /// Stops all further delivery after the downstream cancelled.
  ///
  /// Buffered values and a pending terminal signal are dropped, and later values, demand and
  /// completions are ignored. A delivery loop already running stops before its next value.
  pub fn discard(&self) {
    let dropped = {
      let mut state = self.state.lock();
      if matches!(state.terminal, Terminal::Delivered) {
        return;
      }
      state.terminal = Terminal::Discarded;
      state.demand.reset();
      mem::take(&mut state.queue)
    };
    drop(dropped);
  }

  /// Returns `true` once the downstream cancelled through [`discard`](Self::discard).
  #[must_use]
  pub fn is_discarded(&self) -> bool {
    matches!(self.state.lock().terminal, Terminal::Discarded)
  }

  /// Snapshot of the demand counters.
  #[must_use]
  pub fn demand_state(&self) -> DemandState {
    self.state.lock().demand
  }

  /// Number of values waiting for demand.
  #[must_use]
  pub fn len(&self) -> usize {
    self.state.lock().queue.len()
  }

  /// Returns `true` when no value is waiting for demand.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.state.lock().queue.is_empty()
  }

  /// Returns `true` once the terminal signal has been delivered downstream.
  #[must_use]
  pub fn is_terminated(&self) -> bool {
    matches!(self.state.lock().terminal, Terminal::Delivered)
  }

  /// Like [`buffer`](Self::buffer), but hands the value back instead of panicking once a
  /// terminal signal is recorded. Values arriving after [`discard`](Self::discard) are dropped.
  pub(crate) fn try_buffer(&self, value: T) -> Result<Demand, T> {
    let mut state = self.state.lock();
    if matches!(state.terminal, Terminal::Discarded) {
      return Ok(Demand::NONE);
    }
    if !state.terminal.is_open() {
      return Err(value);
    }
    if state.demand.requested().is_unbounded() && state.queue.is_empty() && !state.draining {
      state.demand.record_processed();
      drop(state);
      return Ok(self.receiver.receive_value(value));
    }
    state.queue.push_back(value);
    drop(state);
    Ok(self.flush(None))
  }

  fn flush(&self, adding: Option<Demand>) -> Demand {
    let mut state = self.state.lock();
    if state.terminal.is_closed() {
      return Demand::NONE;
    }
    let added = adding.filter(Demand::has_demand);
    if let Some(demand) = added {
      state.demand.add_requested(demand);
    }
    // Zero demand only triggers a drain once something was requested before.
    if added.is_none() && !state.demand.requested().has_demand() {
      return Demand::NONE;
    }
    if state.draining {
      return Demand::NONE;
    }

    state.draining = true;
    while state.demand.can_deliver() {
      let Some(value) = state.queue.pop_front() else {
        break;
      };
      state.demand.record_processed();
      drop(state);
      let granted = self.receiver.receive_value(value);
      state = self.state.lock();
      if matches!(state.terminal, Terminal::Discarded) {
        state.draining = false;
        return Demand::NONE;
      }
      state.demand.add_requested(granted);
    }
    state.draining = false;

    let terminal = if state.queue.is_empty() { state.terminal.take_pending() } else { None };
    match terminal {
      | Some(completion) => {
        state.demand.reset();
        drop(state);
        self.receiver.receive_completion(completion);
        Demand::NONE
      },
      | None => state.demand.take_unsent(),
    }
  }
}
