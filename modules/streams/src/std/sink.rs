use flowlatch_utils_rs::std::runtime_toolbox::StdToolbox;

use crate::core::SinkGeneric;

/// Sink specialised for `StdToolbox`.
pub type Sink<In, InErr, Out, OutErr> = SinkGeneric<In, InErr, Out, OutErr, StdToolbox>;

/// Sink whose input and output types coincide.
pub type PassthroughSink<T, E> = SinkGeneric<T, E, T, E, StdToolbox>;
