use flowlatch_utils_rs::std::runtime_toolbox::StdToolbox;

use crate::core::DemandBufferGeneric;

/// Demand buffer specialised for `StdToolbox`.
pub type DemandBuffer<T, E> = DemandBufferGeneric<T, E, StdToolbox>;
