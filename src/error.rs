//! Error types for user agent parsing.

use std::fmt;

/// Errors that can occur when parsing a user agent string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is empty
    Empty,
    /// No matcher in the cascade recognised the input
    Unrecognized,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::Empty => write!(f, "failed to parse user agent: input is empty"),
            ParseErrorKind::Unrecognized => {
                write!(f, "failed to parse user agent '{}': unrecognized format", self.input)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors for version parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Version is empty
    Empty,
    /// Numeric field is empty, not a number, or overflows
    InvalidNumber {
        /// Index of the field (0 = major)
        field: usize,
        /// The offending text
        value: String,
    },
    /// Numeric field has a leading zero
    LeadingZero {
        /// Index of the field (0 = major)
        field: usize,
    },
    /// Neither 1 nor 3 numeric fields
    WrongFieldCount {
        /// Number of fields found
        actual: usize,
    },
    /// Prerelease suffix is empty or holds characters outside `[0-9A-Za-z-.]`
    InvalidPrerelease {
        /// The offending prerelease text
        value: String,
    },
    /// Build metadata is empty or holds characters outside `[0-9A-Za-z-.]`
    InvalidBuild {
        /// The offending build metadata
        value: String,
    },
}

impl fmt::Display for VersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "version cannot be empty"),
            Self::InvalidNumber { field, value } => {
                write!(f, "version field {field} is not a number: '{value}'")
            }
            Self::LeadingZero { field } => {
                write!(f, "version field {field} has a leading zero")
            }
            Self::WrongFieldCount { actual } => {
                write!(f, "version has {actual} numeric fields, expected 1 or 3")
            }
            Self::InvalidPrerelease { value } => {
                write!(f, "invalid prerelease '{value}'")
            }
            Self::InvalidBuild { value } => {
                write!(f, "invalid build metadata '{value}'")
            }
        }
    }
}

impl std::error::Error for VersionError {}
