//! Error types for unit definitions, registry construction and conversion
//!
//! Conversion errors are ordinary values: callers decide how to present
//! them. Only [`RegistryError`] is meant to stop a process at startup.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const NON_POSITIVE_FACTOR: &str = "NON_POSITIVE_FACTOR";
    pub const NON_FINITE_FACTOR: &str = "NON_FINITE_FACTOR";
    pub const EMPTY_NAME: &str = "EMPTY_NAME";
    pub const INVALID_NAME: &str = "INVALID_NAME";
    pub const UNKNOWN_INPUT_UNIT: &str = "UNKNOWN_INPUT_UNIT";
    pub const UNKNOWN_OUTPUT_UNIT: &str = "UNKNOWN_OUTPUT_UNIT";
    pub const EMPTY_REGISTRY: &str = "EMPTY_REGISTRY";
    pub const NO_BUILTINS: &str = "NO_BUILTINS";
}

/// A unit definition that cannot be registered
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DefinitionError {
    #[error("unit '{name}' has non-positive factor {factor}")]
    NonPositiveFactor { name: String, factor: f64 },

    #[error("unit '{name}' has non-finite factor {factor}")]
    NonFiniteFactor { name: String, factor: f64 },

    #[error("unit name is empty")]
    EmptyName,

    #[error("unit name '{0}' contains whitespace")]
    InvalidName(String),
}

impl DefinitionError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NonPositiveFactor { .. } => codes::NON_POSITIVE_FACTOR,
            Self::NonFiniteFactor { .. } => codes::NON_FINITE_FACTOR,
            Self::EmptyName => codes::EMPTY_NAME,
            Self::InvalidName(_) => codes::INVALID_NAME,
        }
    }
}

/// Failure to convert between two unit names
///
/// The side that failed is part of the error so callers can point at the
/// offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("unknown input unit: {0}")]
    UnknownInputUnit(String),

    #[error("unknown output unit: {0}")]
    UnknownOutputUnit(String),
}

impl ConversionError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownInputUnit(_) => codes::UNKNOWN_INPUT_UNIT,
            Self::UnknownOutputUnit(_) => codes::UNKNOWN_OUTPUT_UNIT,
        }
    }

    /// The unit token that could not be resolved
    pub fn unit(&self) -> &str {
        match self {
            Self::UnknownInputUnit(u) | Self::UnknownOutputUnit(u) => u,
        }
    }
}

/// Registry construction failure (fatal at startup)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no unit definitions could be registered")]
    Empty,

    #[error("built-in unit set registered no units")]
    NoBuiltins,
}

impl RegistryError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => codes::EMPTY_REGISTRY,
            Self::NoBuiltins => codes::NO_BUILTINS,
        }
    }
}
