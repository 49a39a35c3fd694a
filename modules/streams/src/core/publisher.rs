//! Publisher abstraction.

use alloc::{string::String, sync::Arc};

use crate::core::{
  Subscriber,
  operator::{Last, Named, Reduce, Scan, TryReduce, TryScan},
};

/// Producer side of the protocol.
///
/// `subscribe` attaches a subscriber and synchronously hands it a subscription. Adjacent stages
/// are tied together through `Output` and `Failure`, so a mismatched chain does not compile.
pub trait Publisher {
  /// Element type delivered to subscribers.
  type Output;
  /// Failure type delivered in a failed completion.
  type Failure;

  /// Attaches `subscriber` to this publisher.
  fn subscribe<S>(&self, subscriber: Arc<S>)
  where
    S: Subscriber<Self::Output, Self::Failure> + 'static;

  /// Emits the running fold of every element, starting from `initial`.
  #[must_use]
  fn scan<Acc, F>(self, initial: Acc, step: F) -> Scan<Self, Acc, F>
  where
    Self: Sized,
    F: Fn(Acc, Self::Output) -> Acc, {
    Scan::new(self, initial, step)
  }

  /// Emits the running fold of every element with a fallible step.
  ///
  /// A step failure cancels the upstream and terminates the stream with that failure.
  #[must_use]
  fn try_scan<Acc, E, F>(self, initial: Acc, step: F) -> TryScan<Self, Acc, F, E>
  where
    Self: Sized,
    F: Fn(Acc, Self::Output) -> Result<Acc, E>, {
    TryScan::new(self, initial, step)
  }

  /// Emits the full fold once the upstream finishes.
  #[must_use]
  fn reduce<Acc, F>(self, initial: Acc, step: F) -> Reduce<Self, Acc, F>
  where
    Self: Sized,
    F: Fn(Acc, Self::Output) -> Acc, {
    Reduce::new(self, initial, step)
  }

  /// Emits the full fold once the upstream finishes, with a fallible step.
  #[must_use]
  fn try_reduce<Acc, E, F>(self, initial: Acc, step: F) -> TryReduce<Self, Acc, F, E>
  where
    Self: Sized,
    F: Fn(Acc, Self::Output) -> Result<Acc, E>, {
    TryReduce::new(self, initial, step)
  }

  /// Emits only the final element, after the upstream finishes normally.
  #[must_use]
  fn last(self) -> Last<Self>
  where
    Self: Sized, {
    Last::new(self)
  }

  /// Relays the stream unchanged while presenting `name` to the upstream.
  #[must_use]
  fn named(self, name: impl Into<String>) -> Named<Self>
  where
    Self: Sized, {
    Named::new(self, name)
  }
}

impl<P> Publisher for &P
where
  P: Publisher + ?Sized,
{
  type Failure = P::Failure;
  type Output = P::Output;

  fn subscribe<S>(&self, subscriber: Arc<S>)
  where
    S: Subscriber<Self::Output, Self::Failure> + 'static, {
    (**self).subscribe(subscriber);
  }
}

impl<P> Publisher for Arc<P>
where
  P: Publisher + ?Sized,
{
  type Failure = P::Failure;
  type Output = P::Output;

  fn subscribe<S>(&self, subscriber: Arc<S>)
  where
    S: Subscriber<Self::Output, Self::Failure> + 'static, {
    (**self).subscribe(subscriber);
  }
}
