use super::Completion;

/// What a sink does with one upstream value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueForwarding<Out, OutErr> {
  /// Filter the value out.
  Drop,
  /// Buffer the value for the downstream.
  Emit(Out),
  /// Terminate without forwarding anything.
  Complete(Completion<OutErr>),
  /// Buffer the value, then terminate.
  EmitAndComplete(Out, Completion<OutErr>),
}
