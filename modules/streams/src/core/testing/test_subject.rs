
use alloc::{
  borrow::ToOwned,
  string::String,
  sync::{Arc, Weak},
  vec::Vec,
};

use ahash::RandomState;
use hashbrown::HashMap;
use spin::Mutex;
use tracing::debug;

use super::TRACE_TARGET;
use crate::core::{Completion, Demand, DemandTracker, EndpointId, Publisher, StreamError, Subscriber, Subscription};

type SubscriberRef<Out, E> = Arc<dyn Subscriber<Out, E>>;

/// Multi-subscriber source that honours each subscriber's cumulative demand.
///
/// Values sent while a subscriber has no outstanding demand are dropped for that subscriber.
/// Subscribers are released on cancellation and on the terminal event; a subscriber attaching
/// after termination immediately receives the recorded terminal event.
pub struct TestSubject<Out, E> {
  shared: Arc<SubjectShared<Out, E>>,
}

struct SubjectShared<Out, E> {
  state: Mutex<SubjectState<Out, E>>,
}

struct SubjectState<Out, E> {
  conduits:   HashMap<EndpointId, Arc<Conduit<Out, E>>, RandomState>,
  completion: Option<Completion<E>>,
  names:      Vec<String>,
}

impl<Out, E> TestSubject<Out, E>
where
  Out: Clone + 'static,
  E: Clone + Send + 'static,
{
  /// Creates a subject with no subscribers.
  #[must_use]
  pub fn new() -> Self {
    let state = SubjectState { conduits: HashMap::with_hasher(RandomState::new()), completion: None, names: Vec::new() };
    Self { shared: Arc::new(SubjectShared { state: Mutex::new(state) }) }
  }

  /// Returns the number of subscribers currently attached.
  #[must_use]
  pub fn subscriber_count(&self) -> usize {
    self.shared.state.lock().conduits.len()
  }

  /// Returns the names of every subscriber attached so far.
  #[must_use]
  pub fn subscriber_names(&self) -> Vec<String> {
    self.shared.state.lock().names.clone()
  }

  /// Delivers `value` to every subscriber with outstanding demand.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::AlreadyTerminated` after a terminal event was sent.
  pub fn send(&self, value: Out) -> Result<(), StreamError> {
    let conduits: Vec<_> = {
      let state = self.shared.state.lock();
      if state.completion.is_some() {
        return Err(StreamError::AlreadyTerminated);
      }
      state.conduits.values().cloned().collect()
    };
    for conduit in conduits {
      conduit.offer(value.clone());
    }
    Ok(())
  }

  /// Delivers `completion` to every subscriber and releases them.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::AlreadyTerminated` after a terminal event was sent.
  pub fn send_completion(&self, completion: Completion<E>) -> Result<(), StreamError> {
    let conduits: Vec<_> = {
      let mut state = self.shared.state.lock();
      if state.completion.is_some() {
        return Err(StreamError::AlreadyTerminated);
      }
      state.completion = Some(completion.clone());
      state.conduits.drain().map(|(_, conduit)| conduit).collect()
    };
    for conduit in conduits {
      conduit.finish(completion.clone());
    }
    Ok(())
  }
}

impl<Out, E> Default for TestSubject<Out, E>
where
  Out: Clone + 'static,
  E: Clone + Send + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<Out, E> Publisher for TestSubject<Out, E>
where
  Out: Clone + 'static,
  E: Clone + Send + 'static,
{
  type Failure = E;
  type Output = Out;

  fn subscribe<S>(&self, subscriber: Arc<S>)
  where
    S: Subscriber<Out, E> + 'static, {
    let subscriber: SubscriberRef<Out, E> = subscriber;
    let conduit = Arc::new(Conduit {
      id:      EndpointId::next(),
      subject: Arc::downgrade(&self.shared),
      state:   Mutex::new(ConduitState { subscriber: Some(subscriber.clone()), demand: DemandTracker::new() }),
    });
    let completion = {
      let mut state = self.shared.state.lock();
      state.names.push(subscriber.name().to_owned());
      if state.completion.is_none() {
        state.conduits.insert(conduit.id, conduit.clone());
      }
      state.completion.clone()
    };
    subscriber.on_subscribe(conduit.clone());
    if let Some(completion) = completion {
      conduit.finish(completion);
    }
  }
}

struct Conduit<Out, E> {
  id:      EndpointId,
  subject: Weak<SubjectShared<Out, E>>,
  state:   Mutex<ConduitState<Out, E>>,
}

struct ConduitState<Out, E> {
  subscriber: Option<SubscriberRef<Out, E>>,
  demand:     DemandTracker,
}

impl<Out, E> Conduit<Out, E> {
  fn offer(&self, value: Out) {
    let subscriber = {
      let mut state = self.state.lock();
      match state.subscriber.clone() {
        | Some(subscriber) if state.demand.consume_one() => subscriber,
        | _ => return,
      }
    };
    let additional = subscriber.on_next(value);
    let mut state = self.state.lock();
    if state.subscriber.is_some() {
      state.demand.add_returned(additional);
    }
  }

  fn finish(&self, completion: Completion<E>) {
    let subscriber = self.state.lock().subscriber.take();
    if let Some(subscriber) = subscriber {
      subscriber.on_complete(completion);
    }
  }
}

impl<Out, E> Subscription for Conduit<Out, E>
where
  Out: 'static,
  E: Send + 'static,
{
  fn request(&self, demand: Demand) {
    let mut state = self.state.lock();
    if state.subscriber.is_none() {
      return;
    }
    if let Err(error) = state.demand.request(demand) {
      debug!(target: TRACE_TARGET, id = %self.id, %error, "ignoring demand request");
    }
  }

  fn cancel(&self) {
    let subscriber = self.state.lock().subscriber.take();
    if subscriber.is_none() {
      return;
    }
    if let Some(subject) = self.subject.upgrade() {
      let removed = subject.state.lock().conduits.remove(&self.id);
      drop(removed);
    }
    drop(subscriber);
  }

  fn id(&self) -> EndpointId {
    self.id
  }

  fn name(&self) -> &str {
    "TestSubject"
  }
}
