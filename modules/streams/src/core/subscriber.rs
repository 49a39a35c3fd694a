//! Subscriber abstraction.

use crate::core::{Completion, Demand, EndpointId, SubscriptionRef};

/// Consumer side of the protocol.
///
/// A publisher calls `on_subscribe` exactly once, then `on_next` no more often than the demand
/// granted so far allows, then at most one `on_complete`.
pub trait Subscriber<In, E>: Send + Sync {
  /// Receives the subscription capability for this stream.
  fn on_subscribe(&self, subscription: SubscriptionRef);

  /// Receives one element and returns the additional demand granted right now.
  fn on_next(&self, input: In) -> Demand;

  /// Receives the terminal event.
  fn on_complete(&self, completion: Completion<E>);

  /// Returns the identity of this subscriber.
  fn id(&self) -> EndpointId {
    EndpointId::of(self)
  }

  /// Returns the display name used for diagnostics.
  fn name(&self) -> &str {
    core::any::type_name::<Self>()
  }
}
