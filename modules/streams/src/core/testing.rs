//! Test doubles for exercising stream components in tests.

mod recorded_signal;
mod test_receiver;
mod test_source;

pub use recorded_signal::RecordedSignal;
pub use test_receiver::TestReceiver;
pub use test_source::TestSource;
