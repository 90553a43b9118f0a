//! Hot multicast source.

use alloc::{sync::Arc, vec::Vec};

use flowlatch_utils_rs::core::{
  runtime_toolbox::{RuntimeToolbox, SyncMutexFamily, ToolboxMutex},
  sync::{ArcShared, WeakShared, sync_mutex_like::SyncMutexLike},
};

use super::{Completion, Demand, Receiver, Source, Subscription};


struct RelayEntry<T, E> {
  id:       u64,
  receiver: ArcShared<dyn Receiver<T, E>>,
  demand:   Demand,
}

struct RelayState<T, E> {
  next_id:  u64,
  entries:  Vec<RelayEntry<T, E>>,
  terminal: Option<Completion<E>>,
}

struct RelayCore<T, E, TB: RuntimeToolbox>
where
  T: Send + 'static,
  E: Send + 'static, {
  state: ToolboxMutex<RelayState<T, E>, TB>,
}

struct RelaySubscription<T, E, TB: RuntimeToolbox>
where
  T: Send + 'static,
  E: Send + 'static, {
  id:   u64,
  core: WeakShared<RelayCore<T, E, TB>>,
}

/// Hot multicast source fed by [`publish`](Self::publish).
///
/// Every subscriber receives the values published while it is subscribed and has outstanding
/// demand; values published while a subscriber has no demand are not replayed to it. A
/// subscriber arriving after [`complete`](Self::complete) receives the terminal signal
/// immediately.
pub struct SignalRelayGeneric<T, E, TB: RuntimeToolbox>
where
  T: Send + 'static,
  E: Send + 'static, {
  core: ArcShared<RelayCore<T, E, TB>>,
}

impl<T, E, TB> SignalRelayGeneric<T, E, TB>
where
  T: Clone + Send + 'static,
  E: Clone + Send + 'static,
  TB: RuntimeToolbox,
{
  /// Creates a relay without subscribers.
  #[must_use]
  pub fn new() -> Self {
    let state = RelayState { next_id: 0, entries: Vec::new(), terminal: None };
    Self { core: ArcShared::new(RelayCore { state: <TB::MutexFamily as SyncMutexFamily>::create(state) }) }
  }

  /// Delivers `value` to every subscriber with outstanding demand.
  ///
  /// Returns the number of subscribers that received it.
  pub fn publish(&self, value: T) -> usize {
    let targets: Vec<(u64, ArcShared<dyn Receiver<T, E>>)> = {
      let mut state = self.core.state.lock();
      if state.terminal.is_some() {
        return 0;
      }
      state
        .entries
        .iter_mut()
        .filter(|entry| entry.demand.has_demand())
        .map(|entry| {
          entry.demand -= Demand::Finite(1);
          (entry.id, entry.receiver.clone())
        })
        .collect()
    };
    for (id, receiver) in &targets {
      let granted = receiver.receive_value(value.clone());
      self.core.add_demand(*id, granted);
    }
    targets.len()
  }

  /// Completes every current and future subscriber.
  pub fn complete(&self, completion: Completion<E>) {
    let entries = {
      let mut state = self.core.state.lock();
      if state.terminal.is_some() {
        return;
      }
      state.terminal = Some(completion.clone());
      core::mem::take(&mut state.entries)
    };
    for entry in entries {
      entry.receiver.receive_completion(completion.clone());
    }
  }

  /// Number of current subscribers.
  #[must_use]
  pub fn subscriber_count(&self) -> usize {
    self.core.state.lock().entries.len()
  }
}

impl<T, E, TB> Default for SignalRelayGeneric<T, E, TB>
where
  T: Clone + Send + 'static,
  E: Clone + Send + 'static,
  TB: RuntimeToolbox,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, E, TB> RelayCore<T, E, TB>
where
  T: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  fn add_demand(&self, id: u64, demand: Demand) {
    if !demand.has_demand() {
      return;
    }
    let mut state = self.state.lock();
    if let Some(entry) = state.entries.iter_mut().find(|entry| entry.id == id) {
      entry.demand += demand;
    }
  }

  fn remove(&self, id: u64) {
    self.state.lock().entries.retain(|entry| entry.id != id);
  }
}

impl<T, E, TB> Source<T, E> for SignalRelayGeneric<T, E, TB>
where
  T: Clone + Send + 'static,
  E: Clone + Send + 'static,
  TB: RuntimeToolbox,
{
  fn subscribe(&self, receiver: ArcShared<dyn Receiver<T, E>>) {
    let (id, terminal) = {
      let mut state = self.core.state.lock();
      let id = state.next_id;
      state.next_id += 1;
      if state.terminal.is_none() {
        state.entries.push(RelayEntry { id, receiver: receiver.clone(), demand: Demand::NONE });
      }
      (id, state.terminal.clone())
    };
    let subscription = ArcShared::new(RelaySubscription::<T, E, TB> { id, core: self.core.downgrade() });
    receiver.receive_subscription(subscription.into_dyn(|inner| inner as Arc<dyn Subscription>));
    if let Some(completion) = terminal {
      receiver.receive_completion(completion);
    }
  }
}

impl<T, E, TB> Subscription for RelaySubscription<T, E, TB>
where
  T: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  fn request(&self, demand: Demand) {
    if let Some(core) = self.core.upgrade() {
      core.add_demand(self.id, demand);
    }
  }

  fn cancel(&self) {
    if let Some(core) = self.core.upgrade() {
      core.remove(self.id);
    }
  }
}
