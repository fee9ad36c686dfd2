//! Unit definitions compiled into the binary
//!
//! Factors are millimetres per unit. Everything else (mm, km, mi, ...)
//! ships as plugin files under `extensions/`.

use ell_plugin::BuiltinSource;

/// Built-in length units, in listing order
pub static UNITS: [(&str, f64); 5] = [
    // SI
    ("m", 1000.0),
    ("cm", 10.0),
    // Imperial
    ("in", 25.4),
    ("ft", 304.8),
    ("yd", 914.4),
];

pub fn builtin_source() -> BuiltinSource {
    BuiltinSource::new("length", &UNITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ell_core::UnitDefinition;

    #[test]
    fn test_builtin_units_are_valid() {
        for (name, factor) in UNITS {
            assert!(UnitDefinition::new(name, factor).is_ok(), "{} is invalid", name);
        }
    }

    #[test]
    fn test_builtin_names_unique() {
        let mut names: Vec<_> = UNITS.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), UNITS.len());
    }
}
