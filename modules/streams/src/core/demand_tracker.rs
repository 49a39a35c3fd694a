//! Demand tracker implementation.


use crate::core::{demand::Demand, stream_error::StreamError};

/// Tracks the outstanding demand a subscriber has granted to its publisher.
///
/// Publishers consume one unit per delivered element and must stop delivering once the tracker
/// reports no remaining credit.
#[derive(Debug, Clone)]
pub struct DemandTracker {
  current: Demand,
}

impl DemandTracker {
  /// Creates a new demand tracker with zero demand.
  #[must_use]
  pub const fn new() -> Self {
    Self { current: Demand::Finite(0) }
  }

  /// Returns the current demand value.
  #[must_use]
  pub const fn current(&self) -> Demand {
    self.current
  }

  /// Adds explicitly requested demand to the tracker.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::InvalidDemand` when `demand` is zero.
  pub const fn request(&mut self, demand: Demand) -> Result<Demand, StreamError> {
    if demand.is_none() {
      return Err(StreamError::InvalidDemand);
    }
    Ok(self.add_returned(demand))
  }

  /// Adds the demand returned from a subscriber's `on_next`; zero is accepted.
  pub const fn add_returned(&mut self, demand: Demand) -> Demand {
    self.current = self.current.saturating_add(demand);
    self.current
  }

  /// Takes one unit of credit for an element about to be delivered.
  ///
  /// Returns `false`, leaving the tracker untouched, when no credit is left.
  #[must_use]
  pub const fn consume_one(&mut self) -> bool {
    match self.current {
      | Demand::Unbounded => true,
      | Demand::Finite(0) => false,
      | Demand::Finite(remaining) => {
        self.current = Demand::Finite(remaining - 1);
        true
      },
    }
  }
}

impl Default for DemandTracker {
  fn default() -> Self {
    Self::new()
  }
}
