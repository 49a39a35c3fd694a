
use alloc::{borrow::ToOwned, string::String, sync::Arc, vec::Vec};

use spin::Mutex;
use tracing::warn;

use super::{CustomSubscription, TRACE_TARGET};
use crate::core::{Completion, Demand, Publisher, StreamError, Subscriber};

type SubscriberRef<Out, E> = Arc<dyn Subscriber<Out, E>>;

/// Single-subscriber publisher driven by hand.
///
/// Hands every subscriber the same [`CustomSubscription`] and forwards `send` calls verbatim,
/// without enforcing demand, so tests can drive a stage past what the protocol allows. A second
/// subscriber is rejected until [`release_subscriber`](Self::release_subscriber) is called.
pub struct CustomPublisher<Out, E> {
  subscription: Arc<CustomSubscription>,
  subscriber:   Mutex<Option<SubscriberRef<Out, E>>>,
  names:        Mutex<Vec<String>>,
}

impl<Out, E> CustomPublisher<Out, E> {
  /// Creates a publisher that hands out `subscription`.
  #[must_use]
  pub fn new(subscription: Arc<CustomSubscription>) -> Self {
    Self { subscription, subscriber: Mutex::new(None), names: Mutex::new(Vec::new()) }
  }

  /// Returns the subscription handed to subscribers.
  #[must_use]
  pub fn subscription(&self) -> Arc<CustomSubscription> {
    self.subscription.clone()
  }

  /// Returns the names of every subscriber attached so far.
  #[must_use]
  pub fn subscriber_names(&self) -> Vec<String> {
    self.names.lock().clone()
  }

  /// Returns `true` while a subscriber is attached.
  #[must_use]
  pub fn has_subscriber(&self) -> bool {
    self.subscriber.lock().is_some()
  }

  /// Delivers `value` regardless of demand and returns the subscriber's answer.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::NotSubscribed` when no subscriber is attached.
  pub fn send(&self, value: Out) -> Result<Demand, StreamError> {
    let subscriber = self.subscriber.lock().clone().ok_or(StreamError::NotSubscribed)?;
    Ok(subscriber.on_next(value))
  }

  /// Delivers `completion` to the attached subscriber, which stays attached.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::NotSubscribed` when no subscriber is attached.
  pub fn send_completion(&self, completion: Completion<E>) -> Result<(), StreamError> {
    let subscriber = self.subscriber.lock().clone().ok_or(StreamError::NotSubscribed)?;
    subscriber.on_complete(completion);
    Ok(())
  }

  /// Attaches `subscriber` and hands it the subscription.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::AlreadySubscribed` while another subscriber is attached.
  pub fn try_subscribe<S>(&self, subscriber: Arc<S>) -> Result<(), StreamError>
  where
    S: Subscriber<Out, E> + 'static, {
    {
      let mut slot = self.subscriber.lock();
      if slot.is_some() {
        return Err(StreamError::AlreadySubscribed);
      }
      *slot = Some(subscriber.clone());
    }
    self.names.lock().push(subscriber.name().to_owned());
    subscriber.on_subscribe(self.subscription.clone());
    Ok(())
  }

  /// Drops the attached subscriber.
  pub fn release_subscriber(&self) {
    let subscriber = self.subscriber.lock().take();
    drop(subscriber);
  }
}

impl<Out, E> Publisher for CustomPublisher<Out, E> {
  type Failure = E;
  type Output = Out;

  fn subscribe<S>(&self, subscriber: Arc<S>)
  where
    S: Subscriber<Out, E> + 'static, {
    if let Err(error) = self.try_subscribe(subscriber) {
      warn!(target: TRACE_TARGET, %error, "rejecting subscriber");
    }
  }
}
