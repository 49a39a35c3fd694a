use crate::core::Demand;

/// Call observed by a [`CustomSubscription`](super::CustomSubscription).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionEvent {
  /// `request` was called with the demand.
  Requested(Demand),
  /// `cancel` was called.
  Cancelled,
}
