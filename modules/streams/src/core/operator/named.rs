//! Diagnostic relay stage.


use alloc::{string::String, sync::Arc};
use core::marker::PhantomData;

use crate::core::{Completion, Demand, EndpointId, OperatorAdapter, Publisher, Subscriber, SubscriptionRef};

/// Relays subscription, elements and completion unchanged under a custom subscriber name.
///
/// The upstream sees a subscriber called `name`; the downstream receives the upstream's own
/// subscription, so demand and cancellation bypass this stage. Named therefore relies on the
/// producer honouring cancel: a producer that keeps delivering after cancel is relayed as is.
pub struct Named<U> {
  upstream: U,
  name:     Arc<str>,
}

impl<U> Named<U> {
  /// Creates a relay over `upstream` presenting `name`.
  #[must_use]
  pub fn new(upstream: U, name: impl Into<String>) -> Self {
    Self { upstream, name: Arc::from(name.into()) }
  }

  /// Returns the presented name.
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Returns the upstream publisher.
  #[must_use]
  pub const fn upstream(&self) -> &U {
    &self.upstream
  }
}

impl<U> Publisher for Named<U>
where
  U: Publisher,
  U::Output: 'static,
  U::Failure: 'static,
{
  type Failure = U::Failure;
  type Output = U::Output;

  fn subscribe<S>(&self, subscriber: Arc<S>)
  where
    S: Subscriber<U::Output, U::Failure> + 'static, {
    let inner = NamedInner { adapter: OperatorAdapter::new(subscriber), name: self.name.clone(), _pd: PhantomData };
    self.upstream.subscribe(Arc::new(inner));
  }
}

struct NamedInner<In, E, S> {
  adapter: OperatorAdapter<S>,
  name:    Arc<str>,
  _pd:     PhantomData<fn(In, E)>,
}

impl<In, E, S> Subscriber<In, E> for NamedInner<In, E, S>
where
  In: 'static,
  E: 'static,
  S: Subscriber<In, E> + 'static,
{
  fn on_subscribe(&self, subscription: SubscriptionRef) {
    if let Some(downstream) = self.adapter.attach(subscription.clone()) {
      downstream.on_subscribe(subscription);
    }
  }

  fn on_next(&self, input: In) -> Demand {
    match self.adapter.downstream() {
      | Some(downstream) => downstream.on_next(input),
      | None => Demand::none(),
    }
  }

  fn on_complete(&self, completion: Completion<E>) {
    if let Some(downstream) = self.adapter.deactivate() {
      downstream.on_complete(completion);
    }
  }

  fn id(&self) -> EndpointId {
    self.adapter.id()
  }

  fn name(&self) -> &str {
    &self.name
  }
}
