//! Discovery configuration

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable holding a platform path list of plugin locations
pub const PLUGIN_PATH_ENV: &str = "ELL_PLUGIN_PATH";

/// Conventional plugin subdirectory
pub const EXTENSIONS_DIR: &str = "extensions";

/// Where to look for plugin files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    pub plugin_dirs: Vec<PathBuf>,
}

impl DiscoveryConfig {
    /// `extensions/` and the working directory, in that order.
    pub fn new() -> Self {
        Self {
            plugin_dirs: vec![PathBuf::from(EXTENSIONS_DIR), PathBuf::from(".")],
        }
    }

    /// Defaults, replaced by `ELL_PLUGIN_PATH` when it is set and non-empty.
    pub fn from_env() -> Self {
        match env::var_os(PLUGIN_PATH_ENV) {
            Some(value) if !value.is_empty() => Self::from_path_list(&value),
            _ => Self::new(),
        }
    }

    pub fn from_path_list(list: &std::ffi::OsStr) -> Self {
        Self {
            plugin_dirs: env::split_paths(list)
                .filter(|p| !p.as_os_str().is_empty())
                .collect(),
        }
    }

    /// No plugin locations: built-in units only.
    pub fn builtin_only() -> Self {
        Self { plugin_dirs: Vec::new() }
    }

    pub fn with_plugin_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.plugin_dirs = dirs.into_iter().map(|d| d.as_ref().to_path_buf()).collect();
        self
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self::new()
    }
}
