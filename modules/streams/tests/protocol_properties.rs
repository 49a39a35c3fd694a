use std::sync::Arc;

use fraktor_reactive_rs::core::{
  Completion, Demand, Publisher,
  testing::{TestSubject, TrackingEvent, TrackingSubscriber},
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum SourceError {
  Broken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FoldError {
  Source(SourceError),
  Rejected(usize),
}

impl From<SourceError> for FoldError {
  fn from(error: SourceError) -> Self {
    Self::Source(error)
  }
}

struct Lcg {
  state: u64,
}

impl Lcg {
  const fn new(seed: u64) -> Self {
    Self { state: seed }
  }

  const fn next_u32(&mut self) -> u32 {
    self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
    (self.state >> 32) as u32
  }

  fn sequence(&mut self) -> Vec<i64> {
    let len = self.next_u32() % 24;
    (0..len).map(|_| i64::from(self.next_u32() % 1000) - 500).collect()
  }
}

fn unbounded<In, E>() -> Arc<TrackingSubscriber<In, E>> {
  Arc::new(TrackingSubscriber::new().with_initial_demand(Demand::unlimited()))
}

fn drive<E: Clone + Send + 'static>(subject: &TestSubject<i64, E>, values: &[i64], completion: Completion<E>) {
  for value in values {
    subject.send(*value).expect("send");
  }
  subject.send_completion(completion).expect("complete");
}

fn prefix_folds(values: &[i64]) -> Vec<i64> {
  values
    .iter()
    .scan(0_i64, |acc, value| {
      *acc += value;
      Some(*acc)
    })
    .collect()
}

#[test]
fn scan_emits_every_prefix_fold() {
  let mut lcg = Lcg::new(7);
  for _ in 0..64 {
    let values = lcg.sequence();
    let subject = TestSubject::<i64, SourceError>::new();
    let tracking = unbounded();
    (&subject).scan(0_i64, |acc, value| acc + value).subscribe(tracking.clone());

    drive(&subject, &values, Completion::Finished);

    assert_eq!(tracking.values(), prefix_folds(&values));
    assert_eq!(tracking.completions(), vec![Completion::Finished]);
  }
}

#[test]
fn reduce_matches_last_of_scan() {
  let mut lcg = Lcg::new(11);
  for _ in 0..64 {
    let values = lcg.sequence();
    let subject = TestSubject::<i64, SourceError>::new();
    let reduced = unbounded();
    let composed = unbounded();
    (&subject).reduce(0_i64, |acc, value| acc + value).subscribe(reduced.clone());
    (&subject).scan(0_i64, |acc, value| acc + value).last().subscribe(composed.clone());

    drive(&subject, &values, Completion::Finished);

    assert_eq!(reduced.values(), composed.values());
    assert_eq!(reduced.values(), prefix_folds(&values).last().copied().into_iter().collect::<Vec<_>>());
    assert_eq!(reduced.completions(), vec![Completion::Finished]);
  }
}

#[test]
fn last_emits_final_element_only_on_finish() {
  let mut lcg = Lcg::new(13);
  for round in 0..64 {
    let values = lcg.sequence();
    let subject = TestSubject::<i64, SourceError>::new();
    let tracking = unbounded();
    (&subject).last().subscribe(tracking.clone());

    let completion = if round % 3 == 0 { Completion::Failure(SourceError::Broken) } else { Completion::Finished };
    drive(&subject, &values, completion.clone());

    let expected = match completion {
      | Completion::Finished => values.last().copied().into_iter().collect::<Vec<_>>(),
      | Completion::Failure(_) => Vec::new(),
    };
    assert_eq!(tracking.values(), expected);
    assert_eq!(tracking.completions(), vec![completion]);
  }
}

#[test]
fn try_scan_fails_on_the_rejected_element() {
  let mut lcg = Lcg::new(17);
  for _ in 0..64 {
    let values: Vec<i64> = (0..=lcg.next_u32() % 16).map(i64::from).collect();
    let reject_at = (lcg.next_u32() as usize) % values.len();
    let subject = TestSubject::<i64, SourceError>::new();
    let tracking = unbounded();
    let seen = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counter = seen.clone();
    (&subject)
      .try_scan(0_i64, move |acc, value| {
        let index = counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if index == reject_at { Err(FoldError::Rejected(index)) } else { Ok(acc + value) }
      })
      .subscribe(tracking.clone());

    for value in &values {
      subject.send(*value).expect("send");
    }

    assert_eq!(tracking.values(), prefix_folds(&values[..reject_at]));
    assert_eq!(tracking.completions(), vec![Completion::Failure(FoldError::Rejected(reject_at))]);
    assert_eq!(seen.load(std::sync::atomic::Ordering::SeqCst), reject_at + 1);
    assert_eq!(subject.subscriber_count(), 0);
  }
}

#[test]
fn finite_demand_is_never_exceeded() {
  let mut lcg = Lcg::new(19);
  for _ in 0..64 {
    let granted = u64::from(lcg.next_u32() % 8) + 1;
    let values = lcg.sequence();
    let subject = TestSubject::<i64, SourceError>::new();
    let tracking = Arc::new(TrackingSubscriber::new().with_initial_demand(Demand::max(granted)));
    (&subject).scan(0_i64, |acc, value| acc + value).subscribe(tracking.clone());

    for value in &values {
      subject.send(*value).expect("send");
    }

    let delivered = tracking.values().len();
    assert_eq!(delivered, values.len().min(usize::try_from(granted).expect("fits")));
  }
}

#[test]
fn single_terminal_event_per_subscriber() {
  let mut lcg = Lcg::new(23);
  for _ in 0..32 {
    let values = lcg.sequence();
    let subject = TestSubject::<i64, SourceError>::new();
    let trackers: Vec<Arc<TrackingSubscriber<i64, FoldError>>> = (0..3).map(|_| unbounded()).collect();
    (&subject).try_scan(0_i64, |acc, value| Ok::<_, FoldError>(acc + value)).subscribe(trackers[0].clone());
    (&subject).try_reduce(0_i64, |acc, value| Ok::<_, FoldError>(acc + value)).subscribe(trackers[1].clone());
    (&subject)
      .try_scan(0_i64, |_, value| if value > 400 { Err(FoldError::Rejected(0)) } else { Ok(value) })
      .last()
      .subscribe(trackers[2].clone());

    drive(&subject, &values, Completion::Failure(SourceError::Broken));

    for tracking in &trackers {
      assert_eq!(tracking.completions().len(), 1);
      let terminal_is_last = matches!(tracking.history().last(), Some(TrackingEvent::Completion(_)));
      assert!(terminal_is_last);
    }
  }
}

#[test]
fn worked_example() {
  let subject = TestSubject::<i64, SourceError>::new();
  let product = unbounded();
  let last = unbounded();
  let running = unbounded();
  (&subject).reduce(1_i64, |acc, value| acc * value).subscribe(product.clone());
  (&subject).last().subscribe(last.clone());
  (&subject).scan(0_i64, |acc, value| acc + value).subscribe(running.clone());

  drive(&subject, &[1, 2, 3], Completion::Finished);

  assert_eq!(product.values(), vec![6]);
  assert_eq!(last.values(), vec![3]);
  assert_eq!(running.values(), vec![1, 3, 6]);
  assert_eq!(subject.subscriber_names(), vec![String::from("Reduce"), String::from("Last"), String::from("Scan")]);
}

#[test]
fn named_stage_is_transparent() {
  let mut lcg = Lcg::new(29);
  let values = lcg.sequence();
  let subject = TestSubject::<i64, SourceError>::new();
  let direct = unbounded();
  let relayed = unbounded();
  (&subject).scan(0_i64, |acc, value| acc + value).subscribe(direct.clone());
  (&subject).named("probe").scan(0_i64, |acc, value| acc + value).subscribe(relayed.clone());

  drive(&subject, &values, Completion::Finished);

  assert_eq!(direct.values(), relayed.values());
  assert_eq!(subject.subscriber_names(), vec![String::from("Scan"), String::from("probe")]);
}
