use super::{StdMutexFamily, StdReentrantMutexFamily};
use crate::core::runtime_toolbox::RuntimeToolbox;

/// Toolbox for std environments, backed by [`std::sync::Mutex`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StdToolbox;

impl RuntimeToolbox for StdToolbox {
  type MutexFamily = StdMutexFamily;
  type ReentrantMutexFamily = StdReentrantMutexFamily;
}
