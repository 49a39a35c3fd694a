use alloc::{string::String, sync::Arc, vec};

use crate::core::{
  Completion, Demand, Publisher, Subscriber,
  testing::{CustomPublisher, CustomSubscription, SubscriptionEvent, TestSubject, TrackingEvent, TrackingSubscriber},
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum TestError {
  Oops,
}

fn custom_publisher() -> (CustomPublisher<u32, TestError>, Arc<CustomSubscription>) {
  let subscription = Arc::new(CustomSubscription::new());
  (CustomPublisher::new(subscription.clone()), subscription)
}

#[test]
fn emits_final_element_on_finish() {
  let (publisher, subscription) = custom_publisher();
  let tracking = Arc::new(TrackingSubscriber::new());
  (&publisher).last().subscribe(tracking.clone());

  for value in [1, 2, 3] {
    assert_eq!(publisher.send(value), Ok(Demand::none()));
  }
  publisher.send_completion(Completion::Finished).expect("complete");

  assert_eq!(tracking.history(), vec![
    TrackingEvent::Subscription(String::from("Last")),
    TrackingEvent::Value(3),
    TrackingEvent::Completion(Completion::Finished),
  ]);
  assert_eq!(subscription.history(), vec![SubscriptionEvent::Requested(Demand::unlimited())]);
}

#[test]
fn empty_upstream_completes_without_value() {
  let subject = TestSubject::<u32, TestError>::new();
  let tracking = Arc::new(TrackingSubscriber::new());
  (&subject).last().subscribe(tracking.clone());

  subject.send_completion(Completion::Finished).expect("complete");

  assert_eq!(tracking.history(), vec![
    TrackingEvent::Subscription(String::from("Last")),
    TrackingEvent::Completion(Completion::Finished),
  ]);
}

#[test]
fn failure_discards_held_element() {
  let (publisher, subscription) = custom_publisher();
  let tracking = Arc::new(TrackingSubscriber::new());
  (&publisher).last().subscribe(tracking.clone());

  publisher.send(1).expect("send");
  publisher.send(2).expect("send");
  publisher.send_completion(Completion::Failure(TestError::Oops)).expect("fail");

  assert_eq!(tracking.history(), vec![
    TrackingEvent::Subscription(String::from("Last")),
    TrackingEvent::Completion(Completion::Failure(TestError::Oops)),
  ]);
  assert_eq!(subscription.history(), vec![SubscriptionEvent::Requested(Demand::unlimited())]);
}

#[test]
fn downstream_demand_is_not_forwarded() {
  let (publisher, subscription) = custom_publisher();
  let tracking = Arc::new(TrackingSubscriber::new().with_initial_demand(Demand::max(1)));
  (&publisher).last().subscribe(tracking.clone());

  tracking.request(Demand::max(5));

  assert_eq!(subscription.history(), vec![SubscriptionEvent::Requested(Demand::unlimited())]);
}

#[test]
fn pulls_every_element_from_a_demand_honouring_source() {
  let subject = TestSubject::<u32, TestError>::new();
  let tracking = Arc::new(TrackingSubscriber::new());
  (&subject).last().subscribe(tracking.clone());

  for value in 1..=100 {
    subject.send(value).expect("send");
  }
  subject.send_completion(Completion::Finished).expect("complete");

  assert_eq!(tracking.values(), vec![100]);
}

#[test]
fn cancel_cancels_upstream_and_suppresses_completion() {
  let (publisher, subscription) = custom_publisher();
  let tracking = Arc::new(TrackingSubscriber::new());
  (&publisher).last().subscribe(tracking.clone());
  publisher.send(9).expect("send");

  tracking.cancel();
  publisher.send_completion(Completion::Finished).expect("complete");

  assert_eq!(tracking.history(), vec![TrackingEvent::Subscription(String::from("Last"))]);
  assert_eq!(subscription.history(), vec![
    SubscriptionEvent::Requested(Demand::unlimited()),
    SubscriptionEvent::Cancelled
  ]);
}

#[test]
fn completion_releases_subscriber_and_stage() {
  let (publisher, _subscription) = custom_publisher();
  let tracking = Arc::new(TrackingSubscriber::<u32, TestError>::new());
  let weak = Arc::downgrade(&tracking);
  (&publisher).last().subscribe(tracking);
  publisher.send(4).expect("send");

  publisher.send_completion(Completion::Finished).expect("complete");

  assert!(weak.upgrade().is_none());
}

#[test]
fn second_completion_is_ignored() {
  let (publisher, _subscription) = custom_publisher();
  let tracking = Arc::new(TrackingSubscriber::new());
  (&publisher).last().subscribe(tracking.clone());
  publisher.send(4).expect("send");

  publisher.send_completion(Completion::Finished).expect("complete");
  publisher.send_completion(Completion::Failure(TestError::Oops)).expect("complete");

  assert_eq!(tracking.completions(), vec![Completion::Finished]);
  assert_eq!(tracking.values(), vec![4]);
}

#[test]
fn presents_itself_by_name() {
  let (publisher, _subscription) = custom_publisher();
  let tracking = Arc::new(TrackingSubscriber::<u32, TestError>::new());
  (&publisher).last().subscribe(tracking.clone());

  let subscription = tracking.subscription().expect("subscription");
  assert_eq!(subscription.name(), "Last");
  assert_eq!(publisher.subscriber_names(), vec![String::from("Last")]);
  assert_ne!(subscription.id(), Subscriber::id(&*tracking));
}

#[test]
fn cancel_releases_the_subscriber() {
  let (publisher, subscription) = custom_publisher();
  let tracking = Arc::new(TrackingSubscriber::<u32, TestError>::new());
  let weak = Arc::downgrade(&tracking);
  (&publisher).last().subscribe(tracking.clone());
  publisher.send(1).expect("send");

  tracking.cancel();
  drop(tracking);

  assert!(weak.upgrade().is_none());
  assert_eq!(subscription.cancellations(), 1);
  assert!(publisher.has_subscriber());
}
