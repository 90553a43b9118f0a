/// Configuration for demand buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemandBufferConfig {
  initial_capacity: usize,
}

impl DemandBufferConfig {
  /// Creates a new configuration with the provided initial queue capacity.
  #[must_use]
  pub const fn new(initial_capacity: usize) -> Self {
    Self { initial_capacity }
  }

  /// Returns the number of values the queue can hold before reallocating.
  #[must_use]
  pub const fn initial_capacity(&self) -> usize {
    self.initial_capacity
  }

  /// Updates the initial capacity.
  #[must_use]
  pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
    self.initial_capacity = initial_capacity;
    self
  }
}

impl Default for DemandBufferConfig {
  fn default() -> Self {
    Self { initial_capacity: 16 }
  }
}
