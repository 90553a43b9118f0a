use super::{SpinToolbox, StdToolbox};
use crate::core::{
  runtime_toolbox::{RuntimeToolbox, SyncMutexFamily, SyncReentrantMutexFamily, ToolboxMutex, ToolboxReentrantMutex},
  sync::{sync_mutex_like::SyncMutexLike, sync_reentrant_mutex_like::SyncReentrantMutexLike},
};

fn bump<TB: RuntimeToolbox>() -> u32 {
  let mutex: ToolboxMutex<u32, TB> = <TB::MutexFamily as SyncMutexFamily>::create(1);
  mutex.with_lock(|value| {
    *value += 1;
    *value
  })
}

fn nested<TB: RuntimeToolbox>() -> u32 {
  let mutex: ToolboxReentrantMutex<u32, TB> = <TB::ReentrantMutexFamily as SyncReentrantMutexFamily>::create(3);
  mutex.with_lock(|outer| mutex.with_lock(|inner| outer + inner))
}

#[test]
fn both_toolboxes_produce_working_mutexes() {
  assert_eq!(bump::<StdToolbox>(), 2);
  assert_eq!(bump::<SpinToolbox>(), 2);
}

#[test]
fn both_toolboxes_produce_reentrant_mutexes() {
  assert_eq!(nested::<StdToolbox>(), 6);
  assert_eq!(nested::<SpinToolbox>(), 6);
}
