//! Test probes for protocol verification.
//!
//! Available to this crate's tests and, behind the `test-support` feature, to downstream crates.

mod custom_publisher;
mod custom_subscription;
mod subscription_event;
mod test_subject;
mod tracking_event;
mod tracking_subscriber;

pub use custom_publisher::CustomPublisher;
pub use custom_subscription::CustomSubscription;
pub use subscription_event::SubscriptionEvent;
pub use test_subject::TestSubject;
pub use tracking_event::TrackingEvent;
pub use tracking_subscriber::TrackingSubscriber;

const TRACE_TARGET: &str = "fraktor::reactive::testing";
