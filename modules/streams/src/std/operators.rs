use flowlatch_utils_rs::std::runtime_toolbox::StdToolbox;

use crate::core::{
  DematerializeGeneric, MaterializeGeneric, PrefixWhileGeneric, RetryWhenGeneric, SignalRelayGeneric,
};

/// Predicate-bounded forwarding specialised for `StdToolbox`.
pub type PrefixWhile<T, E> = PrefixWhileGeneric<T, E, StdToolbox>;

/// Signal reification specialised for `StdToolbox`.
pub type Materialize<T, E> = MaterializeGeneric<T, E, StdToolbox>;

/// Signal reconstruction specialised for `StdToolbox`.
pub type Dematerialize<T, E> = DematerializeGeneric<T, E, StdToolbox>;

/// Failure-driven resubscription specialised for `StdToolbox`.
pub type RetryWhen<T, E, Trig> = RetryWhenGeneric<T, E, Trig, StdToolbox>;

/// Multicast relay specialised for `StdToolbox`.
pub type SignalRelay<T, E> = SignalRelayGeneric<T, E, StdToolbox>;
