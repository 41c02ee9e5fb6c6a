//! `suggest` command: run one consultation and print it.

use std::sync::Arc;

use clap::Args;
use namkaran_core::AppConfig;
use namkaran_engine::{BirthRequest, Consultation, Engine, EngineConfig};

use crate::report::{render_report, render_trace};

#[derive(Debug, Args)]
pub struct SuggestArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// boy, girl or unisex
    #[arg(long, default_value = "unisex")]
    pub gender: String,

    /// Birth time; recorded but not used
    #[arg(long)]
    pub time: Option<String>,

    /// Birth place; recorded but not used
    #[arg(long)]
    pub location: Option<String>,

    /// Cultural category, e.g. "Tamil/South Indian Names"
    #[arg(long)]
    pub category: Option<String>,

    /// Words to match against name meanings
    #[arg(long)]
    pub theme: Option<String>,

    /// Only suggest names beginning with this letter
    #[arg(long)]
    pub starts_with: Option<String>,

    /// Language code for the narrative (and the corpus, in language mode)
    #[arg(long)]
    pub language: Option<String>,

    /// Seed the generator for a reproducible result
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the configured compute delay
    #[arg(long)]
    pub no_delay: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Also print how the names were selected
    #[arg(long)]
    pub trace: bool,
}

impl SuggestArgs {
    fn to_request(&self) -> BirthRequest {
        BirthRequest {
            birth_date: self.date.clone(),
            birth_time: self.time.clone(),
            birth_location: self.location.clone(),
            gender: self.gender.clone(),
            cultural_preference: self.category.clone(),
            name_theme: self.theme.clone(),
            starts_with: self.starts_with.clone(),
            preferred_language: self.language.clone(),
        }
    }
}

pub(crate) fn engine_for(config: &AppConfig, no_delay: bool) -> anyhow::Result<Engine> {
    let corpus = namkaran_core::load_configured_corpus(config)?;
    let mut engine_config = EngineConfig::from_app_config(config);
    if no_delay {
        engine_config.compute_delay_ms = 0;
    }
    Ok(Engine::new(Arc::new(corpus), engine_config))
}

/// Run a consultation and print it.
///
/// # Errors
///
/// Returns an error if the corpus cannot be loaded or the arguments do not
/// form a valid birth request.
pub(crate) async fn run_suggest(config: &AppConfig, args: SuggestArgs) -> anyhow::Result<()> {
    let engine = engine_for(config, args.no_delay)?;
    if engine.config().compute_delay_ms > 0 {
        tracing::info!(
            delay_ms = engine.config().compute_delay_ms,
            "consulting the stars"
        );
    }

    let consultation = engine.consult(args.to_request(), args.seed).await?;
    println!("{}", format_output(&consultation, args.json, args.trace)?);
    Ok(())
}

pub(crate) fn format_output(
    consultation: &Consultation,
    json: bool,
    trace: bool,
) -> anyhow::Result<String> {
    let text = match (json, trace) {
        (true, false) => serde_json::to_string_pretty(&consultation.result)?,
        (true, true) => serde_json::to_string_pretty(&serde_json::json!({
            "result": consultation.result,
            "trace": consultation.trace,
        }))?,
        (false, false) => render_report(&consultation.result),
        (false, true) => format!(
            "{}\n{}",
            render_report(&consultation.result),
            render_trace(&consultation.trace)
        ),
    };
    Ok(text)
}
