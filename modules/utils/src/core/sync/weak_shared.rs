//! Weak reference wrapper for shared ownership.

use alloc::sync::Weak;
use core::fmt;

use super::ArcShared;


/// Weak counterpart of [`ArcShared`], backed by [`alloc::sync::Weak`].
///
/// Used to break reference cycles between a component and the callbacks it hands out.
#[repr(transparent)]
pub struct WeakShared<T: ?Sized>(Weak<T>);

impl<T> WeakShared<T> {
  /// Creates a `WeakShared` that points to nothing.
  #[must_use]
  pub const fn new() -> Self {
    Self(Weak::new())
  }
}

impl<T: ?Sized> WeakShared<T> {
  /// Wraps an existing [`Weak`] inside the shared wrapper.
  #[must_use]
  pub const fn from_weak(inner: Weak<T>) -> Self {
    Self(inner)
  }

  /// Attempts to upgrade the weak reference to an [`ArcShared`].
  ///
  /// Returns `None` if the inner value has been dropped.
  #[must_use]
  pub fn upgrade(&self) -> Option<ArcShared<T>> {
    self.0.upgrade().map(ArcShared::from_arc)
  }

  /// Returns the number of strong references pointing to this allocation.
  #[must_use]
  pub fn strong_count(&self) -> usize {
    self.0.strong_count()
  }
}

impl<T> Default for WeakShared<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: ?Sized> Clone for WeakShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized> fmt::Debug for WeakShared<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("WeakShared").field("strong", &self.0.strong_count()).finish()
  }
}
