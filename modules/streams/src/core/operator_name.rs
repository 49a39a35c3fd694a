//! Display names of the built-in operators.

use core::fmt;

/// Names the built-in operator stages report to their neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorName {
  /// Running fold.
  Scan,
  /// Running fold with a fallible step.
  TryScan,
  /// Final fold.
  Reduce,
  /// Final fold with a fallible step.
  TryReduce,
  /// Last element.
  Last,
}

impl OperatorName {
  /// Returns the display name.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      | Self::Scan => "Scan",
      | Self::TryScan => "TryScan",
      | Self::Reduce => "Reduce",
      | Self::TryReduce => "TryReduce",
      | Self::Last => "Last",
    }
  }
}

impl fmt::Display for OperatorName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
