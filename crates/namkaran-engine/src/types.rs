use chrono::{DateTime, NaiveDate};
use namkaran_core::{AppConfig, Gender, LabelStyle, Localization, ResultSizeMode};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Validated birth details the engine computes from.
///
/// Optional text fields are already trimmed; blank values are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthInput {
    pub date: NaiveDate,
    /// Carried for the record; not used in any computation.
    pub time: Option<String>,
    /// Carried for the record; not used in any computation.
    pub location: Option<String>,
    pub gender: Gender,
    pub cultural_category: Option<String>,
    pub theme: Option<String>,
    pub starts_with: Option<String>,
    pub language: Option<String>,
}

impl BirthInput {
    /// Input with only the required fields set.
    #[must_use]
    pub fn new(date: NaiveDate, gender: Gender) -> Self {
        Self {
            date,
            time: None,
            location: None,
            gender,
            cultural_category: None,
            theme: None,
            starts_with: None,
            language: None,
        }
    }
}

/// Raw form payload as submitted by a client. Every field is a string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthRequest {
    pub birth_date: String,
    #[serde(default)]
    pub birth_time: Option<String>,
    #[serde(default)]
    pub birth_location: Option<String>,
    pub gender: String,
    #[serde(default)]
    pub cultural_preference: Option<String>,
    #[serde(default)]
    pub name_theme: Option<String>,
    #[serde(default)]
    pub starts_with: Option<String>,
    #[serde(default)]
    pub preferred_language: Option<String>,
}

impl TryFrom<BirthRequest> for BirthInput {
    type Error = EngineError;

    fn try_from(req: BirthRequest) -> Result<Self, Self::Error> {
        let date = parse_birth_date(&req.birth_date)?;
        let gender = Gender::parse(&req.gender).ok_or_else(|| {
            EngineError::InvalidInput(format!(
                "gender must be boy, girl or unisex, got '{}'",
                req.gender.trim()
            ))
        })?;

        Ok(Self {
            date,
            time: non_blank(req.birth_time),
            location: non_blank(req.birth_location),
            gender,
            cultural_category: non_blank(req.cultural_preference),
            theme: non_blank(req.name_theme),
            starts_with: non_blank(req.starts_with),
            language: non_blank(req.preferred_language),
        })
    }
}

/// Parse `YYYY-MM-DD`, or the date part of an RFC 3339 timestamp.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if neither form parses.
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate, EngineError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(EngineError::InvalidInput("birth date is required".to_string()));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| EngineError::InvalidInput(format!("unparseable birth date '{raw}'")))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// One suggested name with its randomly assigned score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSuggestion {
    pub name: String,
    pub meaning: String,
    pub origin: String,
    /// 8, 9 or 10.
    pub score: u8,
}

/// Everything a consultation produces. Plain data; persisted verbatim as JSON
/// and re-opened without recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstrologyResult {
    pub birth_sign: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nakshatra: Option<String>,
    pub lucky_numbers: Vec<u8>,
    pub lucky_colors: Vec<String>,
    pub suggested_names: Vec<NameSuggestion>,
    pub planetary_influence: String,
    pub recommendations: Vec<String>,
}

impl AstrologyResult {
    /// Re-open a persisted payload.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SavedResult`] if the JSON does not match the
    /// result shape.
    pub fn from_saved_json(payload: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Serialize for persistence.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SavedResult`] if serialization fails.
    pub fn to_saved_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Mode flags for one engine instance.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub result_size_mode: ResultSizeMode,
    pub include_lunar_mansion: bool,
    pub localization: Localization,
    pub label_style: LabelStyle,
    pub compute_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            result_size_mode: ResultSizeMode::Bounded,
            include_lunar_mansion: true,
            localization: Localization::CorpusBased,
            label_style: LabelStyle::Bilingual,
            compute_delay_ms: 2000,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            result_size_mode: config.result_size_mode,
            include_lunar_mansion: config.include_lunar_mansion,
            localization: config.localization,
            label_style: config.label_style,
            compute_delay_ms: config.compute_delay_ms,
        }
    }
}
