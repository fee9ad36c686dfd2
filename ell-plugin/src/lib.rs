//! Ell Plugin System
//!
//! Discovers unit definitions at startup from:
//! - Compiled-in tables (`BuiltinSource`)
//! - Plugin files (`*.units.json`) found in plugin locations
//! - Any other implementation of `UnitSource`
//!
//! New units can be added by dropping a plugin file into a plugin location;
//! nothing needs to be recompiled.

mod traits;
mod sources;
mod discovery;
mod config;

pub use traits::{UnitSource, RawUnit, LoadError};
pub use sources::{BuiltinSource, FileSource, DirectorySource, PluginFile, PLUGIN_SUFFIX};
pub use discovery::Discovery;
pub use config::{DiscoveryConfig, PLUGIN_PATH_ENV, EXTENSIONS_DIR};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        UnitSource, RawUnit, LoadError,
        BuiltinSource, FileSource, DirectorySource,
        Discovery, DiscoveryConfig,
    };
    pub use ell_core::prelude::*;
}
