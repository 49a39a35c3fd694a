//! Built-in operator stages.
//!
//! Each stage is a cheap publisher description; subscribing creates a fresh
//! [`OperatorAdapter`](crate::core::OperatorAdapter)-backed inner stage per subscriber.

mod last;
mod named;
mod reduce;
mod relay_inner;
mod scan;
mod scan_inner;
mod try_reduce;
mod try_scan;

pub use last::Last;
pub use named::Named;
pub use reduce::Reduce;
pub use scan::Scan;
pub use try_reduce::TryReduce;
pub use try_scan::TryScan;

const TRACE_TARGET: &str = "fraktor::reactive::operator";
