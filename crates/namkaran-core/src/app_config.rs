use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// How many suggestions a computation returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSizeMode {
    /// At most 20 names (10 guaranteed whenever the gender has 10 names).
    Bounded,
    /// The whole shuffled candidate list, uncapped.
    Full,
}

impl std::fmt::Display for ResultSizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultSizeMode::Bounded => write!(f, "bounded"),
            ResultSizeMode::Full => write!(f, "full"),
        }
    }
}

/// Which corpus partition a language selector may pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Localization {
    /// Only cultural categories are consulted; the language selector only
    /// affects narrative templates.
    CorpusBased,
    /// A language partition for the selector wins over the cultural category.
    LanguageBased,
}

impl std::fmt::Display for Localization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Localization::CorpusBased => write!(f, "corpus"),
            Localization::LanguageBased => write!(f, "language"),
        }
    }
}

/// Rendering of sign and lunar-mansion labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// `Leo`, `Magha`
    Romanized,
    /// `सिंह राशि (Simha - Leo)`, `मघा (Magha)`
    Bilingual,
}

impl std::fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelStyle::Romanized => write!(f, "romanized"),
            LabelStyle::Bilingual => write!(f, "bilingual"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// YAML corpus to load instead of the embedded one.
    pub corpus_path: Option<PathBuf>,
    pub result_size_mode: ResultSizeMode,
    pub include_lunar_mansion: bool,
    pub localization: Localization,
    pub label_style: LabelStyle,
    pub compute_delay_ms: u64,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_secs: u64,
}
