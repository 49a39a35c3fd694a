//! Core protocol types and operators.

/// Terminal event definitions.
mod completion;
/// Demand model types.
mod demand;
/// Demand tracking utilities.
mod demand_tracker;
/// Endpoint identity and its allocator.
mod endpoint_id;
/// Built-in operator stages.
pub mod operator;
/// Shared two-slot adapter used by every operator stage.
mod operator_adapter;
/// Display names of the built-in operators.
mod operator_name;
/// Publisher abstraction.
mod publisher;
/// Stream error definitions.
mod stream_error;
/// Subscriber abstraction.
mod subscriber;
/// Subscription capability.
mod subscription;
/// Test probes for protocol verification.
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use completion::Completion;
pub use demand::Demand;
pub use demand_tracker::DemandTracker;
pub use endpoint_id::EndpointId;
pub use operator_adapter::OperatorAdapter;
pub use operator_name::OperatorName;
pub use publisher::Publisher;
pub use stream_error::StreamError;
pub use subscriber::Subscriber;
pub use subscription::{Subscription, SubscriptionRef};
