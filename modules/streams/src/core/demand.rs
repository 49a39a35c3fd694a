//! Demand model types.


use core::{
  fmt,
  ops::{Add, AddAssign},
};

/// Flow-control credit granted by a subscriber to its publisher.
///
/// Demand is cumulative: requests add up, and [`Demand::Unbounded`] absorbs every further
/// addition. Finite additions that would overflow saturate to unbounded. Any finite demand
/// orders below unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Demand {
  /// Finite demand with remaining count.
  Finite(u64),
  /// Unbounded demand.
  Unbounded,
}

impl Demand {
  /// Returns zero demand.
  #[must_use]
  pub const fn none() -> Self {
    Self::Finite(0)
  }

  /// Returns unbounded demand.
  #[must_use]
  pub const fn unlimited() -> Self {
    Self::Unbounded
  }

  /// Returns finite demand for `count` elements.
  #[must_use]
  pub const fn max(count: u64) -> Self {
    Self::Finite(count)
  }

  /// Returns `true` if the demand is unbounded.
  #[must_use]
  pub const fn is_unbounded(&self) -> bool {
    matches!(self, Self::Unbounded)
  }

  /// Returns `true` if the demand is exactly zero.
  #[must_use]
  pub const fn is_none(&self) -> bool {
    matches!(self, Self::Finite(0))
  }

  /// Returns `true` if there is remaining demand.
  #[must_use]
  pub const fn has_demand(&self) -> bool {
    matches!(self, Self::Unbounded) || matches!(self, Self::Finite(remaining) if *remaining > 0)
  }

  /// Returns the remaining finite demand, if any.
  #[must_use]
  pub const fn remaining(&self) -> Option<u64> {
    match self {
      | Self::Finite(value) => Some(*value),
      | Self::Unbounded => None,
    }
  }

  /// Adds two demands, saturating to unbounded.
  #[must_use]
  pub const fn saturating_add(self, other: Self) -> Self {
    match (self, other) {
      | (Self::Finite(lhs), Self::Finite(rhs)) => match lhs.checked_add(rhs) {
        | Some(total) => Self::Finite(total),
        | None => Self::Unbounded,
      },
      | _ => Self::Unbounded,
    }
  }
}

impl Default for Demand {
  fn default() -> Self {
    Self::none()
  }
}

impl Add for Demand {
  type Output = Self;

  fn add(self, rhs: Self) -> Self::Output {
    self.saturating_add(rhs)
  }
}

impl AddAssign for Demand {
  fn add_assign(&mut self, rhs: Self) {
    *self = self.saturating_add(rhs);
  }
}

impl fmt::Display for Demand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Finite(count) => write!(f, "max({count})"),
      | Self::Unbounded => f.write_str("unlimited"),
    }
  }
}
