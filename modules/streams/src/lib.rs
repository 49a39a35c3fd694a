#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unreachable)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::match_like_matches_macro)]
#![cfg_attr(not(test), no_std)]

//! Demand-driven reactive streams for the fraktor runtime.
//!
//! A [`Publisher`](core::Publisher) pushes values to a [`Subscriber`](core::Subscriber) only as far
//! as the subscriber has granted [`Demand`](core::Demand) through its
//! [`Subscription`](core::Subscription). Operators such as `scan`, `reduce` and `last` sit between
//! the two as [`OperatorAdapter`](core::OperatorAdapter)-backed stages which release both of their
//! neighbours exactly once, whichever side terminates the stream first.
//!
//! Delivery is synchronous. Independent chains may run on different threads, but a publisher must
//! serialize its own calls into each subscriber.

extern crate alloc;

pub mod core;
