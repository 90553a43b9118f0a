use alloc::sync::Arc;
use core::{fmt, ops::Deref};

use super::WeakShared;


/// Shared wrapper backed by [`alloc::sync::Arc`].
///
/// Protocol participants (sources, receivers, subscriptions) are passed around as
/// `ArcShared<dyn Trait>`; [`ArcShared::into_dyn`] performs the unsizing step.
#[repr(transparent)]
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T> ArcShared<T> {
  /// Creates a new `ArcShared` by wrapping the provided value.
  pub fn new(value: T) -> Self {
    Self(Arc::new(value))
  }

  /// Attempts to take the inner value when this is the only strong handle.
  ///
  /// # Errors
  ///
  /// Returns the handle unchanged when other strong handles are still alive.
  pub fn try_unwrap(self) -> Result<T, Self> {
    Arc::try_unwrap(self.0).map_err(Self)
  }
}

impl<T: ?Sized> ArcShared<T> {
  /// Wraps an existing [`Arc`] inside the shared wrapper.
  #[must_use]
  pub const fn from_arc(inner: Arc<T>) -> Self {
    Self(inner)
  }

  /// Consumes the wrapper and returns the inner [`Arc`].
  #[must_use]
  pub fn into_arc(self) -> Arc<T> {
    self.0
  }

  /// Converts the handle into another (usually unsized) representation.
  ///
  /// The closure receives the inner [`Arc`] and performs the coercion, e.g.
  /// `shared.into_dyn(|inner| inner as Arc<dyn Subscription>)`.
  pub fn into_dyn<U: ?Sized, F>(self, cast: F) -> ArcShared<U>
  where
    F: FnOnce(Arc<T>) -> Arc<U>, {
    ArcShared(cast(self.0))
  }

  /// Creates a weak handle pointing to the same allocation.
  #[must_use]
  pub fn downgrade(&self) -> WeakShared<T> {
    WeakShared::from_weak(Arc::downgrade(&self.0))
  }

  /// Returns `true` when both handles point to the same allocation.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }

  /// Returns the number of strong handles to the allocation.
  #[must_use]
  pub fn strong_count(&self) -> usize {
    Arc::strong_count(&self.0)
  }
}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(Arc::clone(&self.0))
  }
}

impl<T: ?Sized> Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized> fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ArcShared").field("strong", &Arc::strong_count(&self.0)).finish()
  }
}

impl<T: ?Sized> PartialEq for ArcShared<T> {
  fn eq(&self, other: &Self) -> bool {
    self.ptr_eq(other)
  }
}

impl<T: ?Sized> Eq for ArcShared<T> {}
