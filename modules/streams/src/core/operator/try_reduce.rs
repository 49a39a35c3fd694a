//! Final fold stage with a fallible step.


use alloc::sync::Arc;

use super::{Last, Named, TryScan, relay_inner::RelayInner};
use crate::core::{OperatorName, Publisher, Subscriber};

/// Emits the full left fold of the upstream once it finishes, failing when the step fails.
///
/// Composed like [`Reduce`](super::Reduce) over a [`TryScan`]. A step failure cancels the
/// upstream, discards the partial result and delivers a single failure.
pub struct TryReduce<U, Acc, F, E> {
  composed: Last<TryScan<Named<U>, Acc, F, E>>,
}

impl<U, Acc, F, E> TryReduce<U, Acc, F, E> {
  /// Creates a fallible reduction of `upstream` starting from `initial`.
  #[must_use]
  pub fn new(upstream: U, initial: Acc, step: F) -> Self {
    let named = Named::new(upstream, OperatorName::TryReduce.as_str());
    Self { composed: Last::new(TryScan::new(named, initial, step)) }
  }

  /// Returns the upstream publisher.
  #[must_use]
  pub const fn upstream(&self) -> &U {
    self.composed.upstream().upstream().upstream()
  }

  /// Returns the initial accumulator value.
  #[must_use]
  pub const fn initial(&self) -> &Acc {
    self.composed.upstream().initial()
  }
}

impl<U, Acc, F, E> Publisher for TryReduce<U, Acc, F, E>
where
  U: Publisher,
  U::Output: 'static,
  U::Failure: 'static,
  E: From<U::Failure> + 'static,
  Acc: Clone + Send + 'static,
  F: Fn(Acc, U::Output) -> Result<Acc, E> + Send + Sync + 'static,
{
  type Failure = E;
  type Output = Acc;

  fn subscribe<S>(&self, subscriber: Arc<S>)
  where
    S: Subscriber<Acc, E> + 'static, {
    self.composed.subscribe(RelayInner::new(subscriber, OperatorName::TryReduce.as_str()));
  }
}
