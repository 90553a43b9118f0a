use super::Completion;

#[test]
fn map_failure_only_touches_failures() {
  let finished: Completion<u8> = Completion::Finished;
  assert_eq!(finished.map_failure(u32::from), Completion::Finished);
  assert_eq!(Completion::Failure(4_u8).map_failure(|code| code * 2), Completion::Failure(8));
}

#[test]
fn converts_to_and_from_result() {
  assert_eq!(Completion::<&str>::Finished.into_result(), Ok(()));
  assert_eq!(Completion::Failure("boom").into_result(), Err("boom"));
  assert_eq!(Completion::from(Err::<(), _>(3)), Completion::Failure(3));
  assert!(Completion::from(Ok::<(), u8>(())).is_finished());
}

#[test]
fn failure_accessor() {
  assert_eq!(Completion::Failure(1).failure(), Some(&1));
  assert!(Completion::Failure(1).is_failure());
  assert_eq!(Completion::<i32>::Finished.failure(), None);
}
