use super::{RuntimeToolbox, SpinMutexFamily, SyncMutexFamily, SyncReentrantMutexFamily, ToolboxMutex, ToolboxReentrantMutex};
use crate::{
  core::sync::{sync_mutex_like::SyncMutexLike, sync_reentrant_mutex_like::SyncReentrantMutexLike},
  std::runtime_toolbox::StdReentrantMutexFamily,
};

struct MixedToolbox;

impl RuntimeToolbox for MixedToolbox {
  type MutexFamily = SpinMutexFamily;
  type ReentrantMutexFamily = StdReentrantMutexFamily;
}

#[test]
fn toolbox_mutex_uses_selected_family() {
  type Family = <MixedToolbox as RuntimeToolbox>::MutexFamily;
  let mutex: ToolboxMutex<_, MixedToolbox> = Family::create(5_u32);
  assert_eq!(mutex.with_lock(|value| *value), 5);
}

#[test]
fn toolbox_reentrant_mutex_allows_nested_acquisition() {
  type Family = <MixedToolbox as RuntimeToolbox>::ReentrantMutexFamily;
  let mutex: ToolboxReentrantMutex<_, MixedToolbox> = Family::create(7_u32);
  let nested = mutex.with_lock(|outer| mutex.with_lock(|inner| *outer + *inner));
  assert_eq!(nested, 14);
}
