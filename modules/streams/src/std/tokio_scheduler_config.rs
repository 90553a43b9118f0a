
const DEFAULT_LABEL: &str = "flowlatch-stream";

/// Configuration for [`TokioScheduler`](super::TokioScheduler).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokioSchedulerConfig {
  label:               &'static str,
  inline_when_current: bool,
}

impl TokioSchedulerConfig {
  /// Creates the default configuration.
  #[must_use]
  pub const fn new() -> Self {
    Self { label: DEFAULT_LABEL, inline_when_current: false }
  }

  /// Label attached to the scheduler's trace events.
  #[must_use]
  pub const fn label(&self) -> &'static str {
    self.label
  }

  /// Returns `true` when actions scheduled from the scheduler itself run inline regardless of
  /// the per-call options.
  #[must_use]
  pub const fn inline_when_current(&self) -> bool {
    self.inline_when_current
  }

  /// Updates the label.
  #[must_use]
  pub const fn with_label(mut self, label: &'static str) -> Self {
    self.label = label;
    self
  }

  /// Updates the inline-execution default.
  #[must_use]
  pub const fn with_inline_when_current(mut self, inline_when_current: bool) -> Self {
    self.inline_when_current = inline_when_current;
    self
  }
}

impl Default for TokioSchedulerConfig {
  fn default() -> Self {
    Self::new()
  }
}
