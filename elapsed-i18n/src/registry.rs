//! Locale registry
//!
//! Maps locale codes to phrase tables. The reference locale is seeded at
//! construction and serves both as the fallback for unknown codes and as
//! the list of buckets every new table has to provide.

use crate::locales::{self, REFERENCE_LOCALE};
use crate::{Bucket, ElapsedError, PhraseTable, Result};
use elapsed_log::{debug, info};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Thread-safe registry of phrase tables keyed by locale code.
///
/// Clones share the same underlying tables. Locales can be added but
/// never replaced or removed.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    tables: Arc<RwLock<HashMap<String, PhraseTable>>>,
    reference: Arc<PhraseTable>,
}

impl LocaleRegistry {
    /// Create a registry holding only the reference locale.
    pub fn new() -> Self {
        let reference = locales::english();
        let mut tables = HashMap::new();
        tables.insert(REFERENCE_LOCALE.to_string(), reference.clone());

        Self {
            tables: Arc::new(RwLock::new(tables)),
            reference: Arc::new(reference),
        }
    }

    /// Create a registry with the reference locale and the built-ins.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        {
            let mut tables = registry.tables.write();
            for (code, table) in locales::builtins() {
                tables.insert(code.to_string(), table);
            }
        }
        registry
    }

    /// Register a phrase table under `code`.
    ///
    /// The code is trimmed first. Fails without touching the registry if
    /// the code is blank, already taken, or the table lacks any bucket of
    /// the reference locale.
    pub fn register(&self, code: &str, table: PhraseTable) -> Result<()> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ElapsedError::InvalidCode);
        }

        let missing = table.missing_from(&self.reference);

        let mut tables = self.tables.write();
        if tables.contains_key(code) {
            return Err(ElapsedError::AlreadyExists(code.to_string()));
        }
        if !missing.is_empty() {
            return Err(ElapsedError::Incomplete {
                code: code.to_string(),
                missing,
            });
        }

        tables.insert(code.to_string(), table);
        debug!(target: "elapsed::registry", "Registered locale {}", code);
        Ok(())
    }

    /// Whether `code` is registered (exact, case-sensitive match).
    pub fn contains(&self, code: &str) -> bool {
        self.tables.read().contains_key(code)
    }

    /// Registered codes, sorted.
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.tables.read().keys().cloned().collect();
        codes.sort();
        codes
    }

    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    /// Pairs with [`LocaleRegistry::len`] (clippy `len_without_is_empty`).
    /// Always false, since the reference locale is seeded at construction
    /// and locales are never removed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The reference phrase table.
    pub fn reference(&self) -> &PhraseTable {
        &self.reference
    }

    /// Phrase for a bucket and magnitude in `code`.
    ///
    /// Unknown codes silently use the reference locale.
    pub fn resolve(&self, bucket: Bucket, magnitude: u64, code: &str) -> String {
        let tables = self.tables.read();
        let table = match tables.get(code) {
            Some(table) => table,
            None => {
                debug!(
                    target: "elapsed::registry",
                    "Unknown locale {:?}, using {}", code, REFERENCE_LOCALE
                );
                &self.reference
            }
        };

        table
            .render(bucket, magnitude)
            .or_else(|| self.reference.render(bucket, magnitude))
            .unwrap_or_else(|| bucket.as_str().to_string())
    }

    /// Register every `<code>.json` file in `dir`.
    ///
    /// Expected structure:
    /// - `locales/fr.json`
    /// - `locales/pt-BR.json`
    ///
    /// Stops at the first file that fails to parse or register; files
    /// registered before it stay registered. Returns the number of
    /// locales added.
    pub fn load_from_dir(&self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();

        if !dir.is_dir() {
            return Err(ElapsedError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Directory not found: {:?}", dir),
            )));
        }

        let mut paths: Vec<_> = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<_>>()?;
        paths.retain(|path| path.extension().is_some_and(|ext| ext == "json"));
        paths.sort();

        let mut added = 0;
        for path in paths {
            let code = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| ElapsedError::ParseError(format!("Invalid filename: {:?}", path)))?;

            let content = fs::read_to_string(&path)?;
            let table = PhraseTable::from_json(&content)?;
            self.register(code, table)?;
            added += 1;
        }

        info!(target: "elapsed::registry", "Loaded {} locale(s) from {:?}", added, dir);
        Ok(added)
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
