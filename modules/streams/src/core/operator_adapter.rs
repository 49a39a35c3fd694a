//! Shared two-slot state behind every operator stage.


use alloc::sync::Arc;

use spin::Mutex;
use tracing::{trace, warn};

use crate::core::{Demand, EndpointId, SubscriptionRef};

const TRACE_TARGET: &str = "fraktor::reactive::adapter";

struct Slots<D: ?Sized> {
  downstream: Option<Arc<D>>,
  upstream:   Option<SubscriptionRef>,
}

/// Owns the `(downstream, upstream subscription)` pair of one operator stage.
///
/// Both slots are cleared together on the first terminal event, whether the consumer cancelled
/// or the producer finished. Once cleared the adapter is inert: it cannot attach a new upstream
/// and returns nothing to deliver to. The upstream keeps the stage alive as its subscriber and
/// the downstream keeps it alive as its subscription; clearing the slots is what breaks that
/// cycle.
///
/// Locks are released before any neighbour is called, so stages may re-enter the adapter from
/// inside a downstream callback.
pub struct OperatorAdapter<D: ?Sized> {
  id:    EndpointId,
  slots: Mutex<Slots<D>>,
}

impl<D: ?Sized> OperatorAdapter<D> {
  /// Creates an adapter delivering to `downstream`.
  #[must_use]
  pub fn new(downstream: Arc<D>) -> Self {
    Self { id: EndpointId::next(), slots: Mutex::new(Slots { downstream: Some(downstream), upstream: None }) }
  }

  /// Returns the identity allocated for this stage.
  #[must_use]
  pub const fn id(&self) -> EndpointId {
    self.id
  }

  /// Returns `true` until the adapter is deactivated.
  #[must_use]
  pub fn is_active(&self) -> bool {
    self.slots.lock().downstream.is_some()
  }

  /// Stores the upstream subscription and returns the downstream to notify.
  ///
  /// A second subscription, or one arriving after deactivation, is cancelled and `None` is
  /// returned.
  pub fn attach(&self, upstream: SubscriptionRef) -> Option<Arc<D>> {
    let downstream = {
      let mut slots = self.slots.lock();
      match slots.downstream.clone() {
        | Some(downstream) if slots.upstream.is_none() => {
          slots.upstream = Some(upstream.clone());
          Some(downstream)
        },
        | _ => None,
      }
    };
    match downstream {
      | Some(downstream) => {
        trace!(target: TRACE_TARGET, id = %self.id, upstream = %upstream.id(), "upstream attached");
        Some(downstream)
      },
      | None => {
        warn!(target: TRACE_TARGET, id = %self.id, upstream = %upstream.id(), "rejecting extra upstream subscription");
        upstream.cancel();
        None
      },
    }
  }

  /// Returns the downstream while the adapter is active.
  #[must_use]
  pub fn downstream(&self) -> Option<Arc<D>> {
    self.slots.lock().downstream.clone()
  }

  /// Returns the upstream subscription while the adapter is active.
  #[must_use]
  pub fn upstream(&self) -> Option<SubscriptionRef> {
    self.slots.lock().upstream.clone()
  }

  /// Forwards `demand` to the upstream; a no-op once deactivated.
  pub fn request(&self, demand: Demand) {
    if let Some(upstream) = self.upstream() {
      upstream.request(demand);
    }
  }

  /// Cancels the upstream, if still held, and deactivates.
  ///
  /// Returns the downstream that was released so the caller may still notify it, e.g. with a
  /// transform failure. Repeated calls return `None` and do not touch the upstream again.
  pub fn cancel(&self) -> Option<Arc<D>> {
    let (downstream, upstream) = self.take_slots();
    if let Some(upstream) = upstream {
      trace!(target: TRACE_TARGET, id = %self.id, "cancelling upstream");
      upstream.cancel();
    }
    downstream
  }

  /// Clears both slots without notifying the upstream.
  ///
  /// Called on producer-initiated termination. Returns the released downstream exactly once;
  /// every later call returns `None`, which is what keeps terminal delivery single-shot.
  pub fn deactivate(&self) -> Option<Arc<D>> {
    let (downstream, _upstream) = self.take_slots();
    downstream
  }

  fn take_slots(&self) -> (Option<Arc<D>>, Option<SubscriptionRef>) {
    let (downstream, upstream) = {
      let mut slots = self.slots.lock();
      (slots.downstream.take(), slots.upstream.take())
    };
    if downstream.is_some() {
      trace!(target: TRACE_TARGET, id = %self.id, "deactivated");
    }
    (downstream, upstream)
  }
}
