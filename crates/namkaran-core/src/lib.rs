//! Shared domain types and configuration for namkaran.
//!
//! Holds the read-only [`NameCorpus`] registry the engine draws suggestions
//! from, the [`Gender`] vocabulary used by both the corpus and the birth
//! input, and the environment-driven [`AppConfig`].

pub mod app_config;
pub mod config;
pub mod corpus;
pub mod gender;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, LabelStyle, Localization, ResultSizeMode};
pub use config::{load_app_config, load_app_config_from_env};
pub use corpus::{
    language_code, load_configured_corpus, load_corpus, CorpusPartition, NameCorpus, NameRecord,
    PartitionKind, PartitionSummary, DEFAULT_CATEGORY,
};
pub use gender::{Gender, ResolvedGender};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read corpus file {path}: {source}")]
    CorpusFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse corpus YAML: {0}")]
    CorpusFileParse(#[from] serde_yaml::Error),

    #[error("corpus validation failed: {0}")]
    Validation(String),
}
