//! Ell Units - Length units shipped with Ell
//!
//! Compiled in: m, cm, in, ft, yd (factors in millimetres).
//! The standard extension pack (`extensions/standard.units.json`) adds
//! mm, km, mi, cu (cubit) and my (megalithic yard) at runtime.

mod units;

pub use units::{UNITS, builtin_source};

use ell_core::{RegistryError, UnitRegistry};
use ell_plugin::{Discovery, DiscoveryConfig};

/// Add the built-in length units to a discovery
pub fn load_units_library(discovery: Discovery) -> Discovery {
    discovery.with_builtin(builtin_source())
}

/// Built-in units followed by every plugin found in `config`'s locations
pub fn standard_registry(config: &DiscoveryConfig) -> Result<UnitRegistry, RegistryError> {
    load_units_library(Discovery::new())
        .with_config(config)
        .build()
}
