//! Ell Core - Fundamental types
//!
//! This crate provides the core types used throughout Ell:
//! - `UnitDefinition`: A named unit and its factor against the reference unit (mm)
//! - `UnitRegistry`: The read-only set of known units
//! - `ConversionEngine`: Any-to-any conversion through the reference unit
//! - Error types for each of the above

mod definition;
mod registry;
mod engine;
mod error;

pub use definition::UnitDefinition;
pub use registry::UnitRegistry;
pub use engine::ConversionEngine;
pub use error::{DefinitionError, ConversionError, RegistryError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{UnitDefinition, UnitRegistry, ConversionEngine};
    pub use crate::{DefinitionError, ConversionError, RegistryError};
}
