use flowlatch_utils_rs::std::runtime_toolbox::StdToolbox;

use crate::core::{SubscribeOnGeneric, SubscribeOnSubscriptionGeneric};

/// Scheduler-deferred source specialised for `StdToolbox`.
pub type SubscribeOn<T, E> = SubscribeOnGeneric<T, E, StdToolbox>;

/// Scheduler-deferred subscription specialised for `StdToolbox`.
pub type SubscribeOnSubscription<T, E> = SubscribeOnSubscriptionGeneric<T, E, StdToolbox>;
