//! Subscription capability handed from a publisher to its subscriber.

use alloc::sync::Arc;

use crate::core::{Demand, EndpointId};

/// Shared handle to a type-erased subscription.
pub type SubscriptionRef = Arc<dyn Subscription>;

/// Capability that lets a subscriber pull more elements or stop the stream.
///
/// A subscription is single-use and held by exactly one subscriber. After cancellation or after
/// the publisher's terminal event, both operations are no-ops.
pub trait Subscription: Send + Sync {
  /// Adds `demand` to the credit granted to the publisher.
  fn request(&self, demand: Demand);

  /// Stops the stream; safe to call repeatedly and after termination.
  fn cancel(&self);

  /// Returns the identity of this subscription.
  fn id(&self) -> EndpointId {
    EndpointId::of(self)
  }

  /// Returns the display name used for diagnostics.
  fn name(&self) -> &str {
    core::any::type_name::<Self>()
  }
}
