use flowlatch_utils_rs::std::runtime_toolbox::StdToolbox;

use crate::core::SingleExecutionCancellableGeneric;

/// Single-execution cancellable specialised for `StdToolbox`.
pub type SingleExecutionCancellable<S> = SingleExecutionCancellableGeneric<S, StdToolbox>;
