use alloc::string::String;

use crate::core::Completion;

/// Event observed by a [`TrackingSubscriber`](super::TrackingSubscriber).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingEvent<In, E> {
  /// A subscription with the given display name was received.
  Subscription(String),
  /// An element was received.
  Value(In),
  /// The terminal event was received.
  Completion(Completion<E>),
}
