//! Error types for TeamForge

use thiserror::Error;

/// Main error type for TeamForge operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TeamForgeError {
    /// Team size bounds are inverted
    #[error("Invalid team size bounds: min {min} is greater than max {max}")]
    TeamSizeBounds { min: usize, max: usize },

    /// A school constraint names no school at all
    #[error("Constraint #{index} does not name any school")]
    EmptyConstraint { index: usize },

    /// A school constraint contains a blank school name
    #[error("Constraint #{index} contains a blank school name")]
    BlankSchool { index: usize },

    /// Unknown value for an enumerated field
    #[error("Unknown {field}: {value}")]
    UnknownValue { field: &'static str, value: String },
}

/// Result type alias for TeamForge operations
pub type Result<T> = std::result::Result<T, TeamForgeError>;
