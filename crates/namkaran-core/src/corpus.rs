//! Read-only name corpus registry.
//!
//! A corpus is an ordered list of partitions keyed by corpus gender and
//! either a cultural category (`Sanskrit/Hindu Names`) or a language code
//! (`hi`). It is built once at startup, validated, and shared immutably with
//! the engine. Partition order is significant: top-up merges walk it.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app_config::AppConfig;
use crate::gender::ResolvedGender;
use crate::ConfigError;

/// Category used when the request names none, or names one the corpus lacks.
pub const DEFAULT_CATEGORY: &str = "Sanskrit/Hindu Names";

const BUILTIN_CORPUS: &str = include_str!("../data/names.yaml");

/// One raw name entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// Display name, possibly native script followed by a parenthesized
    /// transliteration, e.g. `"आर्यन (Aryan)"`.
    pub name: String,
    pub meaning: String,
    pub origin: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionKind {
    Category,
    Language,
}

impl std::fmt::Display for PartitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartitionKind::Category => write!(f, "category"),
            PartitionKind::Language => write!(f, "language"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusPartition {
    pub gender: ResolvedGender,
    pub kind: PartitionKind,
    pub label: String,
    pub names: Vec<NameRecord>,
}

impl CorpusPartition {
    fn matches(&self, gender: ResolvedGender, kind: PartitionKind, label: &str) -> bool {
        self.gender == gender && self.kind == kind && self.label.eq_ignore_ascii_case(label.trim())
    }
}

/// Lightweight description of a partition for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionSummary {
    pub gender: ResolvedGender,
    pub kind: PartitionKind,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
struct CorpusFile {
    #[serde(default)]
    default_category: Option<String>,
    partitions: Vec<CorpusPartition>,
}

#[derive(Debug, Clone)]
pub struct NameCorpus {
    default_category: String,
    partitions: Vec<CorpusPartition>,
}

impl NameCorpus {
    /// Build a corpus from partitions, validating it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if a partition is empty, unlabeled,
    /// duplicated, contains duplicate or blank names, or if either gender lacks
    /// the default category.
    pub fn new(
        default_category: impl Into<String>,
        partitions: Vec<CorpusPartition>,
    ) -> Result<Self, ConfigError> {
        let corpus = Self {
            default_category: default_category.into(),
            partitions,
        };
        validate_corpus(&corpus)?;
        Ok(corpus)
    }

    /// The corpus compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` only if the embedded YAML is malformed.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_yaml_str(BUILTIN_CORPUS)
    }

    /// Parse and validate a corpus YAML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document cannot be parsed or fails validation.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let file: CorpusFile = serde_yaml::from_str(content)?;
        Self::new(
            file.default_category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            file.partitions,
        )
    }

    #[must_use]
    pub fn default_category_label(&self) -> &str {
        &self.default_category
    }

    #[must_use]
    pub fn partitions(&self) -> &[CorpusPartition] {
        &self.partitions
    }

    /// Cultural category for `gender`, matched case-insensitively.
    #[must_use]
    pub fn category(&self, gender: ResolvedGender, label: &str) -> Option<&CorpusPartition> {
        self.partitions
            .iter()
            .find(|p| p.matches(gender, PartitionKind::Category, label))
    }

    /// Language partition for `gender`. `selector` may be a code (`hi`) or
    /// a language name (`Hindi`); see [`language_code`].
    #[must_use]
    pub fn language(&self, gender: ResolvedGender, selector: &str) -> Option<&CorpusPartition> {
        let code = language_code(selector);
        self.partitions
            .iter()
            .find(|p| p.matches(gender, PartitionKind::Language, &code))
    }

    /// Default cultural category for `gender`. Always present after validation.
    #[must_use]
    pub fn default_category(&self, gender: ResolvedGender) -> Option<&CorpusPartition> {
        self.category(gender, &self.default_category)
    }

    /// Records of every cultural category of `gender`, in corpus order.
    /// Language partitions are not included.
    pub fn category_records(&self, gender: ResolvedGender) -> impl Iterator<Item = &NameRecord> {
        self.partitions
            .iter()
            .filter(move |p| p.gender == gender && p.kind == PartitionKind::Category)
            .flat_map(|p| p.names.iter())
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<PartitionSummary> {
        self.partitions
            .iter()
            .map(|p| PartitionSummary {
                gender: p.gender,
                kind: p.kind,
                label: p.label.clone(),
                count: p.names.len(),
            })
            .collect()
    }
}

/// Canonical lowercase code for a language selector.
///
/// Known language names map to their code (`"Hindi"` to `hi`); anything else
/// is trimmed and lowercased as-is.
#[must_use]
pub fn language_code(selector: &str) -> String {
    let selector = selector.trim().to_lowercase();
    match selector.as_str() {
        "english" => "en".to_string(),
        "hindi" => "hi".to_string(),
        "tamil" => "ta".to_string(),
        _ => selector,
    }
}

/// Load and validate a name corpus from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_corpus(path: &Path) -> Result<NameCorpus, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CorpusFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    NameCorpus::from_yaml_str(&content)
}

/// The corpus named by `config.corpus_path`, or the built-in one.
///
/// # Errors
///
/// Returns `ConfigError` if the configured file cannot be loaded.
pub fn load_configured_corpus(config: &AppConfig) -> Result<NameCorpus, ConfigError> {
    match &config.corpus_path {
        Some(path) => load_corpus(path),
        None => NameCorpus::builtin(),
    }
}

fn validate_corpus(corpus: &NameCorpus) -> Result<(), ConfigError> {
    let mut seen_partitions = HashSet::new();

    for partition in &corpus.partitions {
        let label = partition.label.trim();
        if label.is_empty() {
            return Err(ConfigError::Validation(
                "partition label must be non-empty".to_string(),
            ));
        }

        let key = (partition.gender, partition.kind, label.to_lowercase());
        if !seen_partitions.insert(key) {
            return Err(ConfigError::Validation(format!(
                "duplicate {} partition '{}' for {}",
                partition.kind, label, partition.gender
            )));
        }

        if partition.names.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{} partition '{}' for {} has no names",
                partition.kind, label, partition.gender
            )));
        }

        let mut seen_names = HashSet::new();
        for record in &partition.names {
            if record.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "blank name in partition '{label}'"
                )));
            }
            if !seen_names.insert(record.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate name '{}' in partition '{label}'",
                    record.name
                )));
            }
        }
    }

    for gender in [ResolvedGender::Boy, ResolvedGender::Girl] {
        if corpus.default_category(gender).is_none() {
            return Err(ConfigError::Validation(format!(
                "default category '{}' missing for {gender}",
                corpus.default_category
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "corpus_test.rs"]
mod tests;
