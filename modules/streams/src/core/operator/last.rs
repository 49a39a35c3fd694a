//! Last-element stage.

#[cfg(test)]
mod tests;

use alloc::sync::{Arc, Weak};
use core::marker::PhantomData;

use spin::Mutex;
use tracing::debug;

use super::TRACE_TARGET;
use crate::core::{
  Completion, Demand, EndpointId, OperatorAdapter, OperatorName, Publisher, Subscriber, Subscription,
  SubscriptionRef,
};

/// Emits only the most recent upstream element, and only when the upstream finishes normally.
///
/// The stage requests unbounded demand as soon as it subscribes, since it has to observe every
/// element. Downstream requests are accepted but have no effect.
pub struct Last<U> {
  upstream: U,
}

impl<U> Last<U> {
  /// Creates a last-element stage over `upstream`.
  #[must_use]
  pub const fn new(upstream: U) -> Self {
    Self { upstream }
  }

  /// Returns the upstream publisher.
  #[must_use]
  pub const fn upstream(&self) -> &U {
    &self.upstream
  }
}

impl<U> Publisher for Last<U>
where
  U: Publisher,
  U::Output: Send + 'static,
  U::Failure: 'static,
{
  type Failure = U::Failure;
  type Output = U::Output;

  fn subscribe<S>(&self, subscriber: Arc<S>)
  where
    S: Subscriber<U::Output, U::Failure> + 'static, {
    self.upstream.subscribe(LastInner::new(subscriber));
  }
}

struct LastInner<In, E, S> {
  this:    Weak<Self>,
  adapter: OperatorAdapter<S>,
  held:    Mutex<Option<In>>,
  _pd:     PhantomData<fn(E)>,
}

impl<In, E, S> LastInner<In, E, S> {
  fn new(downstream: Arc<S>) -> Arc<Self> {
    Arc::new_cyclic(|this| Self {
      this:    this.clone(),
      adapter: OperatorAdapter::new(downstream),
      held:    Mutex::new(None),
      _pd:     PhantomData,
    })
  }
}

impl<In, E, S> Subscriber<In, E> for LastInner<In, E, S>
where
  In: Send + 'static,
  E: 'static,
  S: Subscriber<In, E> + 'static,
{
  fn on_subscribe(&self, subscription: SubscriptionRef) {
    let Some(downstream) = self.adapter.attach(subscription) else {
      return;
    };
    if let Some(this) = self.this.upgrade() {
      downstream.on_subscribe(this);
    }
    self.adapter.request(Demand::unlimited());
  }

  fn on_next(&self, input: In) -> Demand {
    if self.adapter.is_active() {
      *self.held.lock() = Some(input);
    }
    Demand::none()
  }

  fn on_complete(&self, completion: Completion<E>) {
    let Some(downstream) = self.adapter.deactivate() else {
      return;
    };
    let held = self.held.lock().take();
    if let (Completion::Finished, Some(value)) = (&completion, held) {
      let _ = downstream.on_next(value);
    }
    downstream.on_complete(completion);
  }

  fn id(&self) -> EndpointId {
    self.adapter.id()
  }

  fn name(&self) -> &str {
    OperatorName::Last.as_str()
  }
}

impl<In, E, S> Subscription for LastInner<In, E, S>
where
  In: Send + 'static,
  E: 'static,
  S: Subscriber<In, E> + 'static,
{
  fn request(&self, _demand: Demand) {}

  fn cancel(&self) {
    if self.adapter.cancel().is_some() {
      debug!(target: TRACE_TARGET, stage = "Last", id = %self.adapter.id(), "cancelled by downstream");
      self.held.lock().take();
    }
  }

  fn id(&self) -> EndpointId {
    self.adapter.id()
  }

  fn name(&self) -> &str {
    OperatorName::Last.as_str()
  }
}
