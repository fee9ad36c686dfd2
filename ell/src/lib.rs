//! Ell - Extensible length conversion
//!
//! [`Converter`] is the query surface adapters use: list the available
//! units, or run a `<length> <unit> in <unit>` command and get back a
//! sentence. Failures are returned as diagnostic text, never as panics.

mod parser;

pub use parser::{
    ConversionRequest, CommandError, USAGE, KEYWORD, SIGNIFICANT_DIGITS,
    tokenize, parse_command, execute, run_command, format_length,
};
pub use ell_core::{ConversionEngine, ConversionError, RegistryError, UnitDefinition, UnitRegistry};
pub use ell_plugin::{DiscoveryConfig, PLUGIN_PATH_ENV};

use std::sync::Arc;
use tracing::debug;

/// Main conversion facade
///
/// Cheap to clone and safe to share between threads; the registry behind it
/// is never mutated.
#[derive(Debug, Clone)]
pub struct Converter {
    engine: ConversionEngine,
    config: Option<DiscoveryConfig>,
}

impl Converter {
    pub fn new(registry: UnitRegistry) -> Self {
        Self::from_shared(Arc::new(registry))
    }

    pub fn from_shared(registry: Arc<UnitRegistry>) -> Self {
        Self {
            engine: ConversionEngine::new(registry),
            config: None,
        }
    }

    /// Built-in units plus every plugin found in `config`'s locations
    pub fn with_config(config: DiscoveryConfig) -> Result<Self, RegistryError> {
        let registry = ell_units::standard_registry(&config)?;
        Ok(Self {
            engine: ConversionEngine::new(Arc::new(registry)),
            config: Some(config),
        })
    }

    /// Default plugin locations, overridable through `ELL_PLUGIN_PATH`
    pub fn from_env() -> Result<Self, RegistryError> {
        Self::with_config(DiscoveryConfig::from_env())
    }

    /// Rediscover units into a new converter; `self` stays valid.
    ///
    /// A converter built from an explicit registry has nothing to
    /// rediscover and returns a copy of itself.
    pub fn reload(&self) -> Result<Self, RegistryError> {
        match &self.config {
            Some(config) => Self::with_config(config.clone()),
            None => Ok(self.clone()),
        }
    }

    pub fn available_units(&self) -> Vec<String> {
        self.engine.available_units().into_iter().map(String::from).collect()
    }

    pub fn convert(&self, input_value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
        self.engine.convert(input_value, from_unit, to_unit)
    }

    pub fn convert_command(&self, raw: &str) -> String {
        let tokens = tokenize(raw);
        let output = run_command(&self.engine, Some(tokens.as_slice()));
        debug!(input = raw, output = %output, "converted command");
        output
    }

    /// Same as [`Converter::convert_command`] for pre-split arguments
    pub fn convert_args<S: AsRef<str>>(&self, args: Option<&[S]>) -> String {
        run_command(&self.engine, args)
    }

    pub fn engine(&self) -> &ConversionEngine {
        &self.engine
    }
}
