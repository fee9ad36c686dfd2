//! Conversion engine
//!
//! Every conversion goes through the reference unit: source value to
//! reference, then reference to target. One factor per unit is enough to
//! convert between any pair, including a unit and itself.

use crate::{ConversionError, UnitRegistry};
use std::sync::Arc;

/// Converts lengths between registered unit names
#[derive(Debug, Clone)]
pub struct ConversionEngine {
    registry: Arc<UnitRegistry>,
}

impl ConversionEngine {
    pub fn new(registry: Arc<UnitRegistry>) -> Self {
        Self { registry }
    }

    pub fn convert(&self, input_value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
        let from = self.registry.resolve(from_unit)
            .ok_or_else(|| ConversionError::UnknownInputUnit(from_unit.to_string()))?;
        let to = self.registry.resolve(to_unit)
            .ok_or_else(|| ConversionError::UnknownOutputUnit(to_unit.to_string()))?;

        Ok(to.from_reference(from.to_reference(input_value)))
    }

    pub fn available_units(&self) -> Vec<&str> {
        self.registry.available_units()
    }

    pub fn registry(&self) -> &Arc<UnitRegistry> {
        &self.registry
    }
}
