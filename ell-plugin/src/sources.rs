//! Concrete unit sources: compiled-in tables, plugin files, plugin directories

use crate::{LoadError, RawUnit, UnitSource};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name suffix that marks a plugin file
pub const PLUGIN_SUFFIX: &str = ".units.json";

/// On-disk plugin file
///
/// ```json
/// { "name": "extensions", "units": [ { "name": "km", "factor": 1000000.0 } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub units: Vec<RawUnit>,
}

/// Compiled-in table of units
#[derive(Debug, Clone)]
pub struct BuiltinSource {
    name: &'static str,
    units: &'static [(&'static str, f64)],
}

impl BuiltinSource {
    pub const fn new(name: &'static str, units: &'static [(&'static str, f64)]) -> Self {
        Self { name, units }
    }
}

impl UnitSource for BuiltinSource {
    fn describe(&self) -> String {
        format!("builtin:{}", self.name)
    }

    fn load(&self) -> Result<Vec<RawUnit>, LoadError> {
        Ok(self.units.iter().map(|&(name, factor)| RawUnit::new(name, factor)).collect())
    }
}

/// A single `*.units.json` plugin file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UnitSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<RawUnit>, LoadError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|source| LoadError::Io { path: self.path.clone(), source })?;
        let file: PluginFile = serde_json::from_str(&content)
            .map_err(|source| LoadError::Parse { path: self.path.clone(), source })?;

        debug!(
            plugin = file.name.as_deref().unwrap_or_else(|| plugin_stem(&self.path)),
            units = file.units.len(),
            "parsed plugin file"
        );
        Ok(file.units)
    }
}

/// A plugin location: every `*.units.json` file directly inside `dir`
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Plugin files in lexicographic path order.
    ///
    /// A missing directory yields no files.
    pub fn files(&self) -> Result<Vec<FileSource>, LoadError> {
        if !self.dir.is_dir() {
            debug!(dir = %self.dir.display(), "plugin location absent, skipping");
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir)
            .map_err(|source| LoadError::Io { path: self.dir.clone(), source })?;

        let mut paths: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_plugin_file(path))
            .collect();
        paths.sort();

        Ok(paths.into_iter().map(FileSource::new).collect())
    }
}

fn is_plugin_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.len() > PLUGIN_SUFFIX.len() && n.ends_with(PLUGIN_SUFFIX))
}

fn plugin_stem(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.trim_end_matches(PLUGIN_SUFFIX))
        .unwrap_or("plugin")
}
