//! Unit Registry

use crate::{DefinitionError, UnitDefinition};
use std::collections::HashMap;
use tracing::debug;

/// Authoritative set of known units
///
/// Populated once during startup, then shared read-only (usually behind an
/// `Arc`). Re-registering a name replaces the earlier definition but keeps
/// its position in [`UnitRegistry::available_units`].
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: Vec<UnitDefinition>,
    index: HashMap<String, usize>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self {
            units: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_unit(mut self, definition: UnitDefinition) -> Self {
        self.register(definition);
        self
    }

    /// Insert or overwrite a definition by name.
    ///
    /// Returns the definition that was replaced, if any.
    pub fn register(&mut self, definition: UnitDefinition) -> Option<UnitDefinition> {
        match self.index.get(definition.name()) {
            Some(&slot) => {
                debug!(
                    unit = definition.name(),
                    old_factor = self.units[slot].factor(),
                    new_factor = definition.factor(),
                    "unit redefined, later registration wins"
                );
                Some(std::mem::replace(&mut self.units[slot], definition))
            }
            None => {
                self.index.insert(definition.name().to_string(), self.units.len());
                self.units.push(definition);
                None
            }
        }
    }

    /// Validate and register a raw `(name, factor)` pair.
    ///
    /// An invalid pair leaves the registry untouched.
    pub fn register_raw(&mut self, name: &str, factor: f64) -> Result<(), DefinitionError> {
        let definition = UnitDefinition::new(name, factor)?;
        self.register(definition);
        Ok(())
    }

    /// Exact, case-sensitive lookup
    pub fn resolve(&self, name: &str) -> Option<&UnitDefinition> {
        self.index.get(name).map(|&slot| &self.units[slot])
    }

    /// All registered names, in first-registration order
    pub fn available_units(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitDefinition> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(name: &str, factor: f64) -> UnitDefinition {
        UnitDefinition::new(name, factor).unwrap()
    }

    fn basic() -> UnitRegistry {
        UnitRegistry::new()
            .with_unit(unit("m", 1000.0))
            .with_unit(unit("cm", 10.0))
            .with_unit(unit("in", 25.4))
    }

    #[test]
    fn test_resolve() {
        let registry = basic();
        assert_eq!(registry.resolve("cm").map(|u| u.factor()), Some(10.0));
        assert!(registry.resolve("km").is_none());
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = basic();
        assert!(registry.resolve("CM").is_none());
        assert!(registry.resolve(" cm").is_none());
    }

    #[test]
    fn test_available_units_in_insertion_order() {
        assert_eq!(basic().available_units(), vec!["m", "cm", "in"]);
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = basic();
        let replaced = registry.register(unit("cm", 11.0));

        assert_eq!(replaced.map(|u| u.factor()), Some(10.0));
        assert_eq!(registry.resolve("cm").map(|u| u.factor()), Some(11.0));
        assert_eq!(registry.len(), 3);
        // Slot of the first registration is kept
        assert_eq!(registry.available_units(), vec!["m", "cm", "in"]);
    }

    #[test]
    fn test_register_raw_rejects_non_positive() {
        let mut registry = basic();

        assert!(registry.register_raw("bad", 0.0).is_err());
        assert!(registry.register_raw("cm", -10.0).is_err());
        assert!(registry.register_raw("ft", 304.8).is_ok());

        assert!(registry.resolve("bad").is_none());
        assert_eq!(registry.resolve("cm").map(|u| u.factor()), Some(10.0));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_empty() {
        let registry = UnitRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.available_units().is_empty());
    }
}
