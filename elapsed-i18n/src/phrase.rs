//! Phrase tables
//!
//! A [`PhraseTable`] holds one template per bucket for a single language.
//! Templates may contain one integer placeholder, written `%d` or `{n}`.

use crate::{Bucket, ElapsedError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const PLACEHOLDERS: [&str; 2] = ["%d", "{n}"];

/// Templates for every bucket of one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhraseTable {
    phrases: BTreeMap<Bucket, String>,
}

impl PhraseTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template, builder style.
    pub fn with(mut self, bucket: Bucket, template: impl Into<String>) -> Self {
        self.insert(bucket, template);
        self
    }

    /// Add or replace a template.
    pub fn insert(&mut self, bucket: Bucket, template: impl Into<String>) {
        self.phrases.insert(bucket, template.into());
    }

    pub fn get(&self, bucket: Bucket) -> Option<&str> {
        self.phrases.get(&bucket).map(|s| s.as_str())
    }

    pub fn contains(&self, bucket: Bucket) -> bool {
        self.phrases.contains_key(&bucket)
    }

    /// Buckets that have a template, in classification order.
    pub fn buckets(&self) -> impl Iterator<Item = Bucket> + '_ {
        self.phrases.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Buckets defined by `reference` that this table lacks.
    pub fn missing_from(&self, reference: &PhraseTable) -> Vec<Bucket> {
        reference
            .buckets()
            .filter(|bucket| !self.contains(*bucket))
            .collect()
    }

    /// Render the phrase for a bucket, substituting the magnitude.
    ///
    /// Returns `None` when the table has no template for the bucket.
    pub fn render(&self, bucket: Bucket, magnitude: u64) -> Option<String> {
        self.get(bucket).map(|template| substitute(template, magnitude))
    }

    /// Parse a table from a JSON object of bucket keys to templates.
    ///
    /// ```
    /// use elapsed_i18n::{Bucket, PhraseTable};
    ///
    /// let table = PhraseTable::from_json(r#"{ "days": "il y a %d jours" }"#).unwrap();
    /// assert_eq!(table.render(Bucket::Days, 3).as_deref(), Some("il y a 3 jours"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let data: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut table = Self::new();

        for (key, value) in data {
            let bucket: Bucket = key.parse()?;
            match value {
                serde_json::Value::String(template) => table.insert(bucket, template),
                other => {
                    return Err(ElapsedError::ParseError(format!(
                        "template for {} must be a string, got {}",
                        key, other
                    )));
                }
            }
        }

        Ok(table)
    }
}

impl FromIterator<(Bucket, String)> for PhraseTable {
    fn from_iter<I: IntoIterator<Item = (Bucket, String)>>(iter: I) -> Self {
        Self {
            phrases: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(Bucket, &'a str)> for PhraseTable {
    fn from_iter<I: IntoIterator<Item = (Bucket, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(bucket, template)| (bucket, template.to_string()))
            .collect()
    }
}

/// Replace the first placeholder in `template` with `magnitude`.
fn substitute(template: &str, magnitude: u64) -> String {
    let first = PLACEHOLDERS
        .iter()
        .filter_map(|p| template.find(p).map(|at| (at, p.len())))
        .min_by_key(|(at, _)| *at);

    match first {
        Some((at, len)) => {
            let mut out = String::with_capacity(template.len() + 20);
            out.push_str(&template[..at]);
            out.push_str(&magnitude.to_string());
            out.push_str(&template[at + len..]);
            out
        }
        None => template.to_string(),
    }
}
