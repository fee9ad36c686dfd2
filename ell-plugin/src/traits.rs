//! Plugin traits

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Unvalidated unit entry as it comes out of a source
///
/// Validation happens when the entry is registered, so one bad entry never
/// poisons the rest of its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawUnit {
    pub name: String,
    pub factor: f64,
}

impl RawUnit {
    pub fn new(name: impl Into<String>, factor: f64) -> Self {
        Self { name: name.into(), factor }
    }
}

/// A source that could not be loaded at all
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed plugin file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Other(String),
}

/// Anything that can supply unit definitions at startup
pub trait UnitSource: Send + Sync {
    /// Short human-readable label used in diagnostics
    fn describe(&self) -> String;

    fn load(&self) -> Result<Vec<RawUnit>, LoadError>;
}
