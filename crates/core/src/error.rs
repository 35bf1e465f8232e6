//! Error type for experiment operations.

use std::fmt;
use std::io;

/// Error type for the driver and the operations it calls.
///
/// The first two variants are caller errors: arguments that break a
/// documented precondition. `Io` wraps a failure writing the report.
#[derive(Debug)]
pub enum DemoError {
    /// `size` asked for more elements than the sequence holds
    SizeOutOfBounds { size: usize, len: usize },
    /// A formatted label did not fit in the label's storage
    LabelOverflow { needed: usize, capacity: usize },
    /// Writing the report failed
    Io(io::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::SizeOutOfBounds { size, len } => write!(
                f,
                "sum: size {} exceeds sequence length {}",
                size, len
            ),
            DemoError::LabelOverflow { needed, capacity } => write!(
                f,
                "update: label needs {} bytes but capacity is {}",
                needed, capacity
            ),
            DemoError::Io(e) => write!(f, "output error: {}", e),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DemoError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DemoError {
    fn from(e: io::Error) -> Self {
        DemoError::Io(e)
    }
}
