/// Per-call scheduling options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScheduleOptions {
  inline_when_current: bool,
}

impl ScheduleOptions {
  /// Creates options that always hop onto the scheduler.
  #[must_use]
  pub const fn new() -> Self {
    Self { inline_when_current: false }
  }

  /// Returns `true` when the action may run synchronously if the caller is already executing
  /// on the target scheduler.
  #[must_use]
  pub const fn inline_when_current(&self) -> bool {
    self.inline_when_current
  }

  /// Updates the inline-execution flag.
  #[must_use]
  pub const fn with_inline_when_current(mut self, inline_when_current: bool) -> Self {
    self.inline_when_current = inline_when_current;
    self
  }
}
