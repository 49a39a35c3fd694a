use alloc::{borrow::ToOwned, vec::Vec};

use spin::Mutex;

use super::TrackingEvent;
use crate::core::{Completion, Demand, Subscriber, SubscriptionRef};

/// Subscriber that records every event it receives.
///
/// The received subscription is retained, the way a real consumer owns its subscription, until
/// [`cancel`](Self::cancel) or [`release_subscription`](Self::release_subscription) drops it.
pub struct TrackingSubscriber<In, E> {
  history:         Mutex<Vec<TrackingEvent<In, E>>>,
  subscription:    Mutex<Option<SubscriptionRef>>,
  initial_demand:  Option<Demand>,
  demand_per_next: Demand,
}

impl<In, E> TrackingSubscriber<In, E> {
  /// Creates a subscriber that never requests demand on its own.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      history:         Mutex::new(Vec::new()),
      subscription:    Mutex::new(None),
      initial_demand:  None,
      demand_per_next: Demand::Finite(0),
    }
  }

  /// Requests `demand` as soon as the subscription arrives.
  #[must_use]
  pub const fn with_initial_demand(mut self, demand: Demand) -> Self {
    self.initial_demand = Some(demand);
    self
  }

  /// Returns `demand` from every `on_next`.
  #[must_use]
  pub const fn with_demand_per_next(mut self, demand: Demand) -> Self {
    self.demand_per_next = demand;
    self
  }

  /// Returns the recorded events in order.
  #[must_use]
  pub fn history(&self) -> Vec<TrackingEvent<In, E>>
  where
    In: Clone,
    E: Clone, {
    self.history.lock().clone()
  }

  /// Returns the received elements in order.
  #[must_use]
  pub fn values(&self) -> Vec<In>
  where
    In: Clone, {
    self
      .history
      .lock()
      .iter()
      .filter_map(|event| match event {
        | TrackingEvent::Value(value) => Some(value.clone()),
        | _ => None,
      })
      .collect()
  }

  /// Returns the received terminal events.
  #[must_use]
  pub fn completions(&self) -> Vec<Completion<E>>
  where
    E: Clone, {
    self
      .history
      .lock()
      .iter()
      .filter_map(|event| match event {
        | TrackingEvent::Completion(completion) => Some(completion.clone()),
        | _ => None,
      })
      .collect()
  }

  /// Returns the retained subscription.
  #[must_use]
  pub fn subscription(&self) -> Option<SubscriptionRef> {
    self.subscription.lock().clone()
  }

  /// Requests more demand through the retained subscription.
  pub fn request(&self, demand: Demand) {
    if let Some(subscription) = self.subscription() {
      subscription.request(demand);
    }
  }

  /// Cancels the retained subscription and drops it.
  pub fn cancel(&self) {
    let subscription = self.subscription.lock().take();
    if let Some(subscription) = subscription {
      subscription.cancel();
    }
  }

  /// Drops the retained subscription without cancelling it.
  pub fn release_subscription(&self) {
    let subscription = self.subscription.lock().take();
    drop(subscription);
  }
}

impl<In, E> Default for TrackingSubscriber<In, E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<In, E> Subscriber<In, E> for TrackingSubscriber<In, E>
where
  In: Send,
  E: Send,
{
  fn on_subscribe(&self, subscription: SubscriptionRef) {
    self.history.lock().push(TrackingEvent::Subscription(subscription.name().to_owned()));
    *self.subscription.lock() = Some(subscription.clone());
    if let Some(demand) = self.initial_demand {
      subscription.request(demand);
    }
  }

  fn on_next(&self, input: In) -> Demand {
    self.history.lock().push(TrackingEvent::Value(input));
    self.demand_per_next
  }

  fn on_complete(&self, completion: Completion<E>) {
    self.history.lock().push(TrackingEvent::Completion(completion));
  }

  fn name(&self) -> &str {
    "TrackingSubscriber"
  }
}
