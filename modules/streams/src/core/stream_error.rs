//! Stream error definitions.


/// Recoverable errors produced by stream components.
///
/// Protocol violations (emitting after completion, completing twice) are not represented here;
/// they panic instead.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StreamError {
  /// Demand request is invalid.
  #[error("invalid demand request")]
  InvalidDemand,
  /// Required executor is unavailable.
  #[error("executor is unavailable")]
  ExecutorUnavailable,
}
