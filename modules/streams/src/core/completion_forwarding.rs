use super::Completion;

/// What a sink does with the upstream terminal signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionForwarding<Out, OutErr> {
  /// Keep the sink running; a later upstream may take over.
  Swallow,
  /// Terminate with the given signal.
  Complete(Completion<OutErr>),
  /// Buffer a final value, then terminate.
  EmitAndComplete(Out, Completion<OutErr>),
}
