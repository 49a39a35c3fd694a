//! Final fold stage.


use alloc::sync::Arc;

use super::{Last, Named, Scan, relay_inner::RelayInner};
use crate::core::{OperatorName, Publisher, Subscriber};

/// Emits the full left fold of the upstream once it finishes normally.
///
/// Built by composition: the upstream is relayed under the name `"Reduce"`, folded by a
/// [`Scan`], and narrowed to the final accumulator by [`Last`]. The consumer observes the same
/// events and demand a dedicated implementation would produce.
pub struct Reduce<U, Acc, F> {
  composed: Last<Scan<Named<U>, Acc, F>>,
}

impl<U, Acc, F> Reduce<U, Acc, F> {
  /// Creates a reduction of `upstream` starting from `initial`.
  #[must_use]
  pub fn new(upstream: U, initial: Acc, step: F) -> Self {
    let named = Named::new(upstream, OperatorName::Reduce.as_str());
    Self { composed: Last::new(Scan::new(named, initial, step)) }
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

impl<U, Acc, F> Publisher for Reduce<U, Acc, F>
where
  U: Publisher,
  U::Output: 'static,
  U::Failure: 'static,
  Acc: Clone + Send + 'static,
  F: Fn(Acc, U::Output) -> Acc + Send + Sync + 'static,
{
  type Failure = U::Failure;
  type Output = Acc;

  fn subscribe<S>(&self, subscriber: Arc<S>)
  where
    S: Subscriber<Acc, U::Failure> + 'static, {
    self.composed.subscribe(RelayInner::new(subscriber, OperatorName::Reduce.as_str()));
  }
}
