//! Unit definition: a name and its scale against the reference unit

use std::fmt;
use serde::Serialize;
use crate::DefinitionError;

/// A named linear unit
///
/// `factor` is the number of reference units (millimetres) in one of this
/// unit. Always finite and strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitDefinition {
    name: String,
    factor: f64,
}

impl UnitDefinition {
    /// Create a definition, rejecting names that cannot appear in a command
    /// and factors that cannot be divided by.
    pub fn new(name: impl Into<String>, factor: f64) -> Result<Self, DefinitionError> {
        let name = name.into();

        if name.is_empty() {
            return Err(DefinitionError::EmptyName);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(DefinitionError::InvalidName(name));
        }
        if !factor.is_finite() {
            return Err(DefinitionError::NonFiniteFactor { name, factor });
        }
        if factor <= 0.0 {
            return Err(DefinitionError::NonPositiveFactor { name, factor });
        }

        Ok(UnitDefinition { name, factor })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// value_ref = value * factor
    pub(crate) fn to_reference(&self, value: f64) -> f64 {
        value * self.factor
    }

    /// value = value_ref / factor
    pub(crate) fn from_reference(&self, reference_value: f64) -> f64 {
        reference_value / self.factor
    }
}

impl fmt::Display for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
