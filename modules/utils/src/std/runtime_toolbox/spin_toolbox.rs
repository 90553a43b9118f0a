use super::StdReentrantMutexFamily;
use crate::core::runtime_toolbox::{RuntimeToolbox, SpinMutexFamily};

/// Toolbox whose plain locks spin instead of parking the thread.
///
/// Suited to very short critical sections. The reentrant family still parks, since
/// recursive acquisition needs a thread identity only the std runtime can provide.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpinToolbox;

impl RuntimeToolbox for SpinToolbox {
  type MutexFamily = SpinMutexFamily;
  type ReentrantMutexFamily = StdReentrantMutexFamily;
}
