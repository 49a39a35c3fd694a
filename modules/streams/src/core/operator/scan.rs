//! Running fold stage.


use alloc::sync::Arc;

use super::scan_inner::ScanInner;
use crate::core::{OperatorName, Publisher, Subscriber};

/// Emits the running fold of the upstream after every element.
///
/// Demand passes through unchanged: one upstream element yields exactly one downstream element.
pub struct Scan<U, Acc, F> {
  upstream: U,
  initial:  Acc,
  step:     Arc<F>,
}

impl<U, Acc, F> Scan<U, Acc, F> {
  /// Creates a scan over `upstream` starting from `initial`.
  #[must_use]
  pub fn new(upstream: U, initial: Acc, step: F) -> Self {
    Self { upstream, initial, step: Arc::new(step) }
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

impl<U, Acc, F> Publisher for Scan<U, Acc, F>
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
    let step = self.step.clone();
    let infallible = move |acc: Acc, input: U::Output| -> Result<Acc, U::Failure> { Ok(step(acc, input)) };
    let inner: Arc<ScanInner<U::Output, U::Failure, U::Failure, Acc, _, S>> =
      ScanInner::new(subscriber, self.initial.clone(), Arc::new(infallible), OperatorName::Scan.as_str());
    self.upstream.subscribe(inner);
  }
}
