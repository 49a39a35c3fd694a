//! Running fold stage with a fallible step.


use alloc::sync::Arc;
use core::marker::PhantomData;

use super::scan_inner::ScanInner;
use crate::core::{OperatorName, Publisher, Subscriber};

/// Emits the running fold of the upstream, failing the stream when the step fails.
///
/// Upstream failures are converted into `E` through `From`.
pub struct TryScan<U, Acc, F, E> {
  upstream: U,
  initial:  Acc,
  step:     Arc<F>,
  _pd:      PhantomData<fn() -> E>,
}

impl<U, Acc, F, E> TryScan<U, Acc, F, E> {
  /// Creates a fallible scan over `upstream` starting from `initial`.
  #[must_use]
  pub fn new(upstream: U, initial: Acc, step: F) -> Self {
    Self { upstream, initial, step: Arc::new(step), _pd: PhantomData }
  }

  /// Returns the upstream publisher.
  #[must_use]
  pub const fn upstream(&self) -> &U {
    &self.upstream
  }

  /// Returns the initial accumulator value.
  #[must_use]
  pub const fn initial(&self) -> &Acc {
    &self.initial
  }
}

impl<U, Acc, F, E> Publisher for TryScan<U, Acc, F, E>
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
    let inner: Arc<ScanInner<U::Output, U::Failure, E, Acc, F, S>> =
      ScanInner::new(subscriber, self.initial.clone(), self.step.clone(), OperatorName::TryScan.as_str());
    self.upstream.subscribe(inner);
  }
}
