//! Formatter configuration
//!
//! Read from environment variables or built in code:
//!
//! - `ELAPSED_BUILTIN_LOCALES=1|0` - Seed the built-in locales (default on)
//! - `ELAPSED_LOCALE_DIR=path` - Directory of `<code>.json` phrase files

use crate::{LocaleRegistry, Result};
use elapsed_log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// How the locale registry of a formatter is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElapsedConfig {
    /// Register the built-in locales besides the reference one
    pub builtin_locales: bool,
    /// Directory of extra phrase files to register
    pub locale_dir: Option<PathBuf>,
}

impl Default for ElapsedConfig {
    fn default() -> Self {
        Self {
            builtin_locales: true,
            locale_dir: None,
        }
    }
}

impl ElapsedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let builtin_locales = env::var("ELAPSED_BUILTIN_LOCALES")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.builtin_locales);

        let locale_dir = env::var_os("ELAPSED_LOCALE_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let config = Self {
            builtin_locales,
            locale_dir,
        };
        debug!(target: "elapsed::config", "Loaded configuration: {:?}", config);
        config
    }

    pub fn builtin_locales(mut self, enabled: bool) -> Self {
        self.builtin_locales = enabled;
        self
    }

    pub fn locale_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.locale_dir = Some(dir.into());
        self
    }

    /// Build a registry: reference locale, then built-ins, then files.
    pub fn build_registry(&self) -> Result<LocaleRegistry> {
        let registry = if self.builtin_locales {
            LocaleRegistry::with_builtins()
        } else {
            LocaleRegistry::new()
        };

        if let Some(dir) = &self.locale_dir {
            registry.load_from_dir(dir)?;
        }

        Ok(registry)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ElapsedError, locales};
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = ElapsedConfig::default();
        assert!(config.builtin_locales);
        assert!(config.locale_dir.is_none());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_build_registry_without_builtins() {
        let registry = ElapsedConfig::new()
            .builtin_locales(false)
            .build_registry()
            .unwrap();
        assert_eq!(registry.codes(), vec!["en"]);
    }

    #[test]
    fn test_build_registry_with_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("fr-CA.json"),
            serde_json::to_string(&locales::french()).unwrap(),
        )
        .unwrap();

        let registry = ElapsedConfig::new()
            .builtin_locales(false)
            .locale_dir(dir.path())
            .build_registry()
            .unwrap();
        assert_eq!(registry.codes(), vec!["en", "fr-CA"]);
    }

    #[test]
    fn test_build_registry_dir_conflicts_with_builtin() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("fr.json"),
            serde_json::to_string(&locales::french()).unwrap(),
        )
        .unwrap();

        let err = ElapsedConfig::new()
            .locale_dir(dir.path())
            .build_registry()
            .unwrap_err();
        assert!(matches!(err, ElapsedError::AlreadyExists(code) if code == "fr"));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ElapsedConfig = serde_json::from_str(r#"{ "locale_dir": "locales" }"#).unwrap();
        assert!(config.builtin_locales);
        assert_eq!(config.locale_dir, Some(PathBuf::from("locales")));
    }
}
