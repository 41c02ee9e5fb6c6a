//! Consultation orchestration.

use std::sync::Arc;
use std::time::Duration;

use namkaran_core::NameCorpus;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::colors::lucky_colors;
use crate::error::EngineError;
use crate::mansion::derive_mansion;
use crate::narrative::{assemble, Language};
use crate::numerology::lucky_numbers;
use crate::selection::{select_names, SelectionTrace};
use crate::sign::derive_sign;
use crate::types::{AstrologyResult, BirthInput, BirthRequest, EngineConfig};

/// A computed result together with how its names were chosen.
#[derive(Debug, Clone)]
pub struct Consultation {
    pub result: AstrologyResult,
    pub trace: SelectionTrace,
}

/// Runs stages A-F against a shared, read-only corpus.
#[derive(Debug, Clone)]
pub struct Engine {
    corpus: Arc<NameCorpus>,
    config: EngineConfig,
}

impl Engine {
    #[must_use]
    pub fn new(corpus: Arc<NameCorpus>, config: EngineConfig) -> Self {
        Self { corpus, config }
    }

    #[must_use]
    pub fn corpus(&self) -> &NameCorpus {
        &self.corpus
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute a result. All randomness is drawn from `rng`.
    pub fn compute<R: Rng + ?Sized>(&self, input: &BirthInput, rng: &mut R) -> AstrologyResult {
        self.compute_traced(input, rng).result
    }

    /// Same as [`Engine::compute`], also returning the selection trace.
    pub fn compute_traced<R: Rng + ?Sized>(&self, input: &BirthInput, rng: &mut R) -> Consultation {
        let style = self.config.label_style;

        let sign = derive_sign(input.date);
        let sign_label = sign.label(style);
        let mansion = derive_mansion(input.date);
        let mansion_label = mansion.label(style);
        tracing::debug!(date = %input.date, %sign, mansion = mansion.romanized_name(), "derived sign and mansion");

        let numbers = lucky_numbers(input.date, &mansion_label);
        let colors = lucky_colors(&sign_label);
        tracing::debug!(?numbers, ?colors, "derived lucky numbers and colors");

        let selection = select_names(
            &self.corpus,
            input,
            self.config.result_size_mode,
            self.config.localization,
            rng,
        );

        let shown_mansion = self
            .config
            .include_lunar_mansion
            .then_some(mansion_label);
        let language = Language::resolve(input.language.as_deref());
        let first_color = colors.first().map_or("", String::as_str);
        let narrative = assemble(&sign_label, shown_mansion.as_deref(), first_color, language);

        tracing::info!(
            sign = %sign,
            mansion = mansion.romanized_name(),
            gender = %selection.trace.resolved_gender,
            names = selection.names.len(),
            %language,
            "consultation computed"
        );

        Consultation {
            result: AstrologyResult {
                birth_sign: sign_label,
                nakshatra: shown_mansion,
                lucky_numbers: numbers,
                lucky_colors: colors,
                suggested_names: selection.names,
                planetary_influence: narrative.planetary_influence,
                recommendations: narrative.recommendations,
            },
            trace: selection.trace,
        }
    }

    /// Wait out the configured delay, then compute.
    ///
    /// A `seed` makes the result reproducible; otherwise the generator is
    /// seeded from the OS.
    pub async fn compute_delayed(&self, input: &BirthInput, seed: Option<u64>) -> Consultation {
        if self.config.compute_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.compute_delay_ms)).await;
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.compute_traced(input, &mut rng)
    }

    /// Validate a raw request and run [`Engine::compute_delayed`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if the request has an
    /// unparseable date or an unknown gender. Nothing is delayed in that case.
    pub async fn consult(
        &self,
        request: BirthRequest,
        seed: Option<u64>,
    ) -> Result<Consultation, EngineError> {
        let input = BirthInput::try_from(request)?;
        Ok(self.compute_delayed(&input, seed).await)
    }
}
