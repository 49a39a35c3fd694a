use alloc::sync::{Arc, Weak};
use core::marker::PhantomData;

use tracing::debug;

use super::TRACE_TARGET;
use crate::core::{Completion, Demand, EndpointId, OperatorAdapter, Subscriber, Subscription, SubscriptionRef};

/// Outermost stage of a composed operator.
///
/// Presents itself to the downstream as the subscription, so the consumer only ever sees the
/// composed operator's name, and forwards everything else verbatim.
pub(crate) struct RelayInner<In, E, S> {
  this:    Weak<Self>,
  adapter: OperatorAdapter<S>,
  name:    &'static str,
  _pd:     PhantomData<fn(In, E)>,
}

impl<In, E, S> RelayInner<In, E, S> {
  pub(crate) fn new(downstream: Arc<S>, name: &'static str) -> Arc<Self> {
    Arc::new_cyclic(|this| Self { this: this.clone(), adapter: OperatorAdapter::new(downstream), name, _pd: PhantomData })
  }
}

impl<In, E, S> Subscriber<In, E> for RelayInner<In, E, S>
where
  In: 'static,
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
    self.name
  }
}

impl<In, E, S> Subscription for RelayInner<In, E, S>
where
  In: 'static,
  E: 'static,
  S: Subscriber<In, E> + 'static,
{
  fn request(&self, demand: Demand) {
    self.adapter.request(demand);
  }

  fn cancel(&self) {
    if self.adapter.cancel().is_some() {
      debug!(target: TRACE_TARGET, stage = self.name, id = %self.adapter.id(), "cancelled by downstream");
    }
  }

  fn id(&self) -> EndpointId {
    self.adapter.id()
  }

  fn name(&self) -> &str {
    self.name
  }
}
