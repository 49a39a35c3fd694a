use alloc::sync::{Arc, Weak};
use core::marker::PhantomData;

use spin::Mutex;
use tracing::debug;

use super::TRACE_TARGET;
use crate::core::{
  Completion, Demand, EndpointId, OperatorAdapter, Subscriber, Subscription, SubscriptionRef,
};

/// Per-subscription state shared by `Scan` and `TryScan`.
///
/// The step always yields a `Result`; the infallible variant wraps its closure in `Ok`.
pub(crate) struct ScanInner<In, UE, DE, Acc, F, S> {
  this:        Weak<Self>,
  adapter:     OperatorAdapter<S>,
  accumulator: Mutex<Option<Acc>>,
  step:        Arc<F>,
  name:        &'static str,
  _pd:         PhantomData<fn(In, UE) -> DE>,
}

impl<In, UE, DE, Acc, F, S> ScanInner<In, UE, DE, Acc, F, S> {
  pub(crate) fn new(downstream: Arc<S>, initial: Acc, step: Arc<F>, name: &'static str) -> Arc<Self> {
    Arc::new_cyclic(|this| Self {
      this: this.clone(),
      adapter: OperatorAdapter::new(downstream),
      accumulator: Mutex::new(Some(initial)),
      step,
      name,
      _pd: PhantomData,
    })
  }
}

impl<In, UE, DE, Acc, F, S> Subscriber<In, UE> for ScanInner<In, UE, DE, Acc, F, S>
where
  In: 'static,
  UE: 'static,
  DE: From<UE> + 'static,
  Acc: Clone + Send + 'static,
  F: Fn(Acc, In) -> Result<Acc, DE> + Send + Sync + 'static,
  S: Subscriber<Acc, DE> + 'static,
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
    let Some(downstream) = self.adapter.downstream() else {
      return Demand::none();
    };
    let Some(current) = self.accumulator.lock().take() else {
      return Demand::none();
    };
    match (self.step)(current, input) {
      | Ok(next) => {
        *self.accumulator.lock() = Some(next.clone());
        downstream.on_next(next)
      },
      | Err(error) => {
        drop(downstream);
        debug!(target: TRACE_TARGET, stage = self.name, id = %self.adapter.id(), "step failed, cancelling upstream");
        if let Some(downstream) = self.adapter.cancel() {
          downstream.on_complete(Completion::Failure(error));
        }
        Demand::none()
      },
    }
  }

  fn on_complete(&self, completion: Completion<UE>) {
    if let Some(downstream) = self.adapter.deactivate() {
      self.accumulator.lock().take();
      downstream.on_complete(completion.map_failure(DE::from));
    }
  }

  fn id(&self) -> EndpointId {
    self.adapter.id()
  }

  fn name(&self) -> &str {
    self.name
  }
}

impl<In, UE, DE, Acc, F, S> Subscription for ScanInner<In, UE, DE, Acc, F, S>
where
  In: 'static,
  UE: 'static,
  DE: 'static,
  Acc: Send + 'static,
  F: Send + Sync + 'static,
  S: Subscriber<Acc, DE> + 'static,
{
  fn request(&self, demand: Demand) {
    self.adapter.request(demand);
  }

  fn cancel(&self) {
    if self.adapter.cancel().is_some() {
      debug!(target: TRACE_TARGET, stage = self.name, id = %self.adapter.id(), "cancelled by downstream");
      self.accumulator.lock().take();
    }
  }

  fn id(&self) -> EndpointId {
    self.adapter.id()
  }

  fn name(&self) -> &str {
    self.name
  }
}
