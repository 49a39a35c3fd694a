//! Stream error definitions.


/// Protocol misuse detected by the crate's own publishers and trackers.
///
/// User failures travel as the publisher's `Failure` type inside a
/// [`Completion`](crate::core::Completion); this enum never wraps them.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum StreamError {
  /// Demand request is invalid.
  #[error("invalid demand request")]
  InvalidDemand,
  /// A terminal event was already delivered.
  #[error("stream already terminated")]
  AlreadyTerminated,
  /// The publisher accepts a single subscriber and already has one.
  #[error("publisher already has a subscriber")]
  AlreadySubscribed,
  /// No subscriber is attached.
  #[error("no subscriber attached")]
  NotSubscribed,
}
