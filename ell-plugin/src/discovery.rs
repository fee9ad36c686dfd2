//! Registry discovery: aggregate unit sources into a `UnitRegistry`

use crate::{DirectorySource, DiscoveryConfig, UnitSource};
use ell_core::{RegistryError, UnitRegistry};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

enum Location {
    Source(Arc<dyn UnitSource>),
    Directory(DirectorySource),
}

/// Ordered list of unit sources to load at startup
///
/// Built-in sources load first, then plugin sources and locations in the
/// order they were added. Later definitions replace earlier ones of the
/// same name. A source that fails to load is logged and skipped.
pub struct Discovery {
    builtins: Vec<Arc<dyn UnitSource>>,
    locations: Vec<Location>,
}

impl Discovery {
    pub fn new() -> Self {
        Self {
            builtins: Vec::new(),
            locations: Vec::new(),
        }
    }

    pub fn with_builtin<S: UnitSource + 'static>(mut self, source: S) -> Self {
        self.builtins.push(Arc::new(source));
        self
    }

    pub fn with_source<S: UnitSource + 'static>(mut self, source: S) -> Self {
        self.locations.push(Location::Source(Arc::new(source)));
        self
    }

    pub fn with_plugin_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.locations.push(Location::Directory(DirectorySource::new(dir)));
        self
    }

    pub fn with_config(self, config: &DiscoveryConfig) -> Self {
        config.plugin_dirs.iter().fold(self, |d, dir| d.with_plugin_dir(dir.clone()))
    }

    /// Load every source into a fresh registry.
    ///
    /// Fails only when the built-in sources contribute nothing, or when
    /// nothing at all could be registered.
    pub fn build(&self) -> Result<UnitRegistry, RegistryError> {
        let mut registry = UnitRegistry::new();

        let builtin_count: usize = self.builtins.iter()
            .map(|source| load_into(&mut registry, source.as_ref()))
            .sum();
        if !self.builtins.is_empty() && builtin_count == 0 {
            return Err(RegistryError::NoBuiltins);
        }

        let mut scanned: HashSet<PathBuf> = HashSet::new();
        for location in &self.locations {
            match location {
                Location::Source(source) => {
                    load_into(&mut registry, source.as_ref());
                }
                Location::Directory(dir) => {
                    let key = dir.dir().canonicalize().unwrap_or_else(|_| dir.dir().to_path_buf());
                    if !scanned.insert(key) {
                        debug!(dir = %dir.dir().display(), "plugin location already scanned");
                        continue;
                    }
                    match dir.files() {
                        Ok(files) => {
                            for file in &files {
                                load_into(&mut registry, file);
                            }
                        }
                        Err(e) => warn!(dir = %dir.dir().display(), error = %e, "skipping plugin location"),
                    }
                }
            }
        }

        if registry.is_empty() {
            return Err(RegistryError::Empty);
        }

        info!(units = registry.len(), "unit registry ready");
        Ok(registry)
    }
}

impl Default for Discovery {
    fn default() -> Self {
        Self::new()
    }
}

/// Register everything `source` yields; returns the number of accepted entries.
fn load_into(registry: &mut UnitRegistry, source: &dyn UnitSource) -> usize {
    let units = match source.load() {
        Ok(units) => units,
        Err(e) => {
            warn!(source = %source.describe(), error = %e, "skipping unit source");
            return 0;
        }
    };

    let mut accepted = 0;
    for raw in units {
        match registry.register_raw(&raw.name, raw.factor) {
            Ok(()) => accepted += 1,
            Err(e) => warn!(source = %source.describe(), code = e.code(), error = %e, "skipping unit definition"),
        }
    }

    debug!(source = %source.describe(), accepted, "loaded unit source");
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuiltinSource, LoadError, RawUnit};
    use std::fs;

    static BASIC: [(&str, f64); 5] = [
        ("m", 1000.0), ("cm", 10.0), ("in", 25.4), ("ft", 304.8), ("yd", 914.4),
    ];

    struct FailingSource;

    impl UnitSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        fn load(&self) -> Result<Vec<RawUnit>, LoadError> {
            Err(LoadError::Other("source unavailable".to_string()))
        }
    }

    struct FixedSource(Vec<RawUnit>);

    impl UnitSource for FixedSource {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        fn load(&self) -> Result<Vec<RawUnit>, LoadError> {
            Ok(self.0.clone())
        }
    }

    fn basic() -> Discovery {
        Discovery::new().with_builtin(BuiltinSource::new("basic", &BASIC))
    }

    #[test]
    fn test_builtins_only() {
        let registry = basic().build().unwrap();
        assert_eq!(registry.available_units(), vec!["m", "cm", "in", "ft", "yd"]);
    }

    #[test]
    fn test_builtins_then_plugins_disjoint() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("more.units.json"),
            r#"{"units":[{"name":"km","factor":1000000},{"name":"mi","factor":1609344}]}"#,
        ).unwrap();

        let registry = basic().with_plugin_dir(dir.path()).build().unwrap();
        assert_eq!(registry.len(), 5 + 2);
        assert_eq!(registry.available_units(), vec!["m", "cm", "in", "ft", "yd", "km", "mi"]);
    }

    #[test]
    fn test_plugin_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("survey.units.json"),
            r#"{"units":[{"name":"ft","factor":304.8006096}]}"#,
        ).unwrap();

        let registry = basic().with_plugin_dir(dir.path()).build().unwrap();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.resolve("ft").map(|u| u.factor()), Some(304.8006096));
    }

    #[test]
    fn test_files_load_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.units.json"), r#"{"units":[{"name":"x","factor":2}]}"#).unwrap();
        fs::write(dir.path().join("a.units.json"), r#"{"units":[{"name":"x","factor":1}]}"#).unwrap();

        let registry = basic().with_plugin_dir(dir.path()).build().unwrap();
        assert_eq!(registry.resolve("x").map(|u| u.factor()), Some(2.0));
    }

    #[test]
    fn test_malformed_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.units.json"), "not json at all").unwrap();
        fs::write(dir.path().join("good.units.json"), r#"{"units":[{"name":"cu","factor":457.2}]}"#).unwrap();

        let registry = basic().with_plugin_dir(dir.path()).build().unwrap();
        assert_eq!(registry.len(), 6);
        assert!(registry.resolve("cu").is_some());
    }

    #[test]
    fn test_invalid_entry_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("mixed.units.json"),
            r#"{"units":[{"name":"neg","factor":-1},{"name":"zero","factor":0},{"name":"my","factor":829.66}]}"#,
        ).unwrap();

        let registry = basic().with_plugin_dir(dir.path()).build().unwrap();
        assert!(registry.resolve("neg").is_none());
        assert!(registry.resolve("zero").is_none());
        assert_eq!(registry.resolve("my").map(|u| u.factor()), Some(829.66));
    }

    #[test]
    fn test_failing_source_is_skipped() {
        let registry = basic()
            .with_source(FailingSource)
            .with_source(FixedSource(vec![RawUnit::new("mm", 1.0)]))
            .build()
            .unwrap();
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_missing_locations_are_not_errors() {
        let dir = tempfile::tempdir().unwrap();
        let config = DiscoveryConfig::new()
            .with_plugin_dirs([dir.path().join("extensions"), dir.path().join("elsewhere")]);

        let registry = basic().with_config(&config).build().unwrap();
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_duplicate_location_scanned_once() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.units.json"), r#"{"units":[{"name":"km","factor":1000000}]}"#).unwrap();

        let registry = basic()
            .with_plugin_dir(dir.path())
            .with_plugin_dir(dir.path().join("."))
            .build()
            .unwrap();
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_empty_builtins_is_fatal() {
        static NOTHING: [(&str, f64); 0] = [];
        let result = Discovery::new()
            .with_builtin(BuiltinSource::new("nothing", &NOTHING))
            .with_source(FixedSource(vec![RawUnit::new("mm", 1.0)]))
            .build();
        assert_eq!(result.unwrap_err(), RegistryError::NoBuiltins);
    }

    #[test]
    fn test_nothing_registered_is_fatal() {
        let result = Discovery::new().with_source(FailingSource).build();
        assert_eq!(result.unwrap_err(), RegistryError::Empty);
    }
}
