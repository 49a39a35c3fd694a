//! Endpoint identity for live protocol objects.


use core::{fmt, sync::atomic::Ordering};

use portable_atomic::AtomicU64;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a subscriber or subscription.
///
/// Identities compare by issuance, never by the value of the object they name. Allocated
/// identities and address-derived identities live in separate spaces and never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EndpointId {
  origin: Origin,
  value:  u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Origin {
  Allocated,
  Address,
}

impl EndpointId {
  /// Allocates a process-wide unique identifier.
  ///
  /// Each value is issued exactly once; concurrent callers never observe the same value.
  #[must_use]
  pub fn next() -> Self {
    let value = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    Self { origin: Origin::Allocated, value }
  }

  /// Derives an identifier from the address of `object`.
  ///
  /// The result is only meaningful while `object` stays alive and pinned in place, e.g. behind an
  /// `Arc`.
  #[must_use]
  pub fn of<T: ?Sized>(object: &T) -> Self {
    let address = core::ptr::from_ref(object).cast::<()>() as usize;
    Self { origin: Origin::Address, value: address as u64 }
  }

  /// Returns the raw identifier value.
  #[must_use]
  pub const fn value(self) -> u64 {
    self.value
  }
}

impl fmt::Display for EndpointId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "0x{:x}", self.value)
  }
}
