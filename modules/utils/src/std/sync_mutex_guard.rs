extern crate std;

use core::ops::{Deref, DerefMut};
use std::sync::MutexGuard;

/// Exclusive access to the value inside a [`StdSyncMutex`](crate::std::StdSyncMutex).
///
/// The lock is released when the guard is dropped.
pub struct StdSyncMutexGuard<'a, T>(MutexGuard<'a, T>);

impl<'a, T> StdSyncMutexGuard<'a, T> {
  pub(crate) const fn from_std(inner: MutexGuard<'a, T>) -> Self {
    Self(inner)
  }
}

impl<T> Deref for StdSyncMutexGuard<'_, T> {
  type Target = T;

  fn deref(&self) -> &T {
    &self.0
  }
}

impl<T> DerefMut for StdSyncMutexGuard<'_, T> {
  fn deref_mut(&mut self) -> &mut T {
    &mut self.0
  }
}
