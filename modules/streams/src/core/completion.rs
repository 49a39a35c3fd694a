//! Terminal event definitions.

#[cfg(test)]
mod tests;

/// Terminal event delivered to a subscriber exactly once per subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion<E> {
  /// The publisher finished normally.
  Finished,
  /// The publisher terminated with a failure.
  Failure(E),
}

impl<E> Completion<E> {
  /// Returns `true` for a normal completion.
  #[must_use]
  pub const fn is_finished(&self) -> bool {
    matches!(self, Self::Finished)
  }

  /// Returns the failure, if any.
  #[must_use]
  pub const fn failure(&self) -> Option<&E> {
    match self {
      | Self::Finished => None,
      | Self::Failure(error) => Some(error),
    }
  }

  /// Converts the failure type, leaving a normal completion untouched.
  #[must_use]
  pub fn map_failure<F, M>(self, map: M) -> Completion<F>
  where
    M: FnOnce(E) -> F, {
    match self {
      | Self::Finished => Completion::Finished,
      | Self::Failure(error) => Completion::Failure(map(error)),
    }
  }
}

impl<E> From<Result<(), E>> for Completion<E> {
  fn from(result: Result<(), E>) -> Self {
    match result {
      | Ok(()) => Self::Finished,
      | Err(error) => Self::Failure(error),
    }
  }
}
