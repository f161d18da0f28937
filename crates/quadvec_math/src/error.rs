//! Vector error types

use std::fmt;

/// Error type for checked vector operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Component index outside `0..4`
    IndexOutOfRange { index: usize },
    /// Axis index outside `0..4`
    AxisOutOfRange { index: usize },
    /// Swizzle pattern repeats a component, so it cannot be assigned through
    SwizzleNotWritable { pattern: String },
    /// Unknown or malformed component format token
    InvalidFormat { format: String, reason: &'static str },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::IndexOutOfRange { index } => {
                write!(f, "Component index {} out of range (expected 0..=3)", index)
            }
            VectorError::AxisOutOfRange { index } => {
                write!(f, "Axis index {} out of range (expected 0..=3)", index)
            }
            VectorError::SwizzleNotWritable { pattern } => {
                write!(f, "Swizzle '{}' repeats a component and is read-only", pattern)
            }
            VectorError::InvalidFormat { format, reason } => {
                write!(f, "Invalid format '{}': {}", format, reason)
            }
        }
    }
}

impl std::error::Error for VectorError {}
