use super::Completion;

#[test]
fn finished_carries_no_failure() {
  let completion = Completion::<&str>::Finished;
  assert!(completion.is_finished());
  assert_eq!(completion.failure(), None);
}

#[test]
fn map_failure_converts_only_failures() {
  let failure = Completion::Failure(7_u8).map_failure(u32::from);
  assert_eq!(failure, Completion::Failure(7_u32));
  assert_eq!(Completion::<u8>::Finished.map_failure(u32::from), Completion::Finished);
}

#[test]
fn converts_from_result() {
  assert_eq!(Completion::from(Ok::<(), &str>(())), Completion::Finished);
  assert_eq!(Completion::from(Err::<(), _>("boom")), Completion::Failure("boom"));
}
