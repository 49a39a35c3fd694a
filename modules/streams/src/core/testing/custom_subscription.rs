use alloc::vec::Vec;

use spin::Mutex;

use super::SubscriptionEvent;
use crate::core::{Demand, Subscription};

/// Subscription that records every call and otherwise does nothing.
pub struct CustomSubscription {
  history: Mutex<Vec<SubscriptionEvent>>,
}

impl CustomSubscription {
  /// Creates a subscription with an empty history.
  #[must_use]
  pub const fn new() -> Self {
    Self { history: Mutex::new(Vec::new()) }
  }

  /// Returns the recorded calls in order.
  #[must_use]
  pub fn history(&self) -> Vec<SubscriptionEvent> {
    self.history.lock().clone()
  }

  /// Returns how many times `cancel` was called.
  #[must_use]
  pub fn cancellations(&self) -> usize {
    self.history.lock().iter().filter(|event| matches!(event, SubscriptionEvent::Cancelled)).count()
  }
}

impl Default for CustomSubscription {
  fn default() -> Self {
    Self::new()
  }
}

impl Subscription for CustomSubscription {
  fn request(&self, demand: Demand) {
    self.history.lock().push(SubscriptionEvent::Requested(demand));
  }

  fn cancel(&self) {
    self.history.lock().push(SubscriptionEvent::Cancelled);
  }

  fn name(&self) -> &str {
    "CustomSubscription"
  }
}
