//! End-to-end tests for `Engine` against the built-in corpus.
//!
//! Randomness is pinned with seeded `StdRng`s; the delay tests run on a
//! paused tokio clock so they finish instantly.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use namkaran_core::{Gender, LabelStyle, Localization, NameCorpus, ResultSizeMode};
use namkaran_engine::{
    AstrologyResult, BirthInput, BirthRequest, Engine, EngineConfig, EngineError, RuleOutcome,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::task::JoinSet;
use tokio::time::Instant;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn engine_with(config: EngineConfig) -> Engine {
    let corpus = NameCorpus::builtin().expect("built-in corpus must load");
    Engine::new(Arc::new(corpus), config)
}

fn default_engine() -> Engine {
    engine_with(EngineConfig::default())
}

fn name_set(result: &AstrologyResult) -> HashSet<String> {
    result.suggested_names.iter().map(|n| n.name.clone()).collect()
}

// ---------------------------------------------------------------------------
// Derived attributes
// ---------------------------------------------------------------------------

#[test]
fn leo_birthday_yields_leo_attributes() {
    let engine = default_engine();
    let input = BirthInput::new(date(1990, 8, 15), Gender::Girl);
    let mut rng = StdRng::seed_from_u64(15);

    let result = engine.compute(&input, &mut rng);

    assert_eq!(result.birth_sign, "सिंह राशि (Simha - Leo)");
    assert_eq!(result.lucky_colors, vec!["Gold", "Orange", "Red"]);
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.contains("Gold")));
}

#[test]
fn leap_day_in_march_maps_to_mrigashira() {
    let engine = engine_with(EngineConfig {
        label_style: LabelStyle::Romanized,
        ..EngineConfig::default()
    });
    let input = BirthInput::new(date(2024, 3, 1), Gender::Boy);
    let mut rng = StdRng::seed_from_u64(0);

    let result = engine.compute(&input, &mut rng);

    assert_eq!(result.birth_sign, "Pisces");
    assert_eq!(result.nakshatra.as_deref(), Some("Mrigashira"));
}

#[test]
fn lucky_numbers_are_short_distinct_and_single_digit() {
    let engine = default_engine();
    let mut rng = StdRng::seed_from_u64(3);
    let mut day = date(2023, 1, 1);
    while day.year() == 2023 {
        let result = engine.compute(&BirthInput::new(day, Gender::Boy), &mut rng);
        let numbers = &result.lucky_numbers;
        assert!((1..=3).contains(&numbers.len()), "{day}: {numbers:?}");
        assert!(numbers.iter().all(|n| (1..=9).contains(n)), "{day}: {numbers:?}");
        let distinct: HashSet<_> = numbers.iter().collect();
        assert_eq!(distinct.len(), numbers.len(), "{day}: {numbers:?}");
        day = day.succ_opt().expect("next day");
    }
}

// ---------------------------------------------------------------------------
// Name selection through the engine
// ---------------------------------------------------------------------------

#[test]
fn unmatched_starting_letter_still_returns_names() {
    let engine = default_engine();
    let mut input = BirthInput::new(date(1990, 8, 15), Gender::Boy);
    input.starts_with = Some("Z".to_string());
    let mut rng = StdRng::seed_from_u64(21);

    let consultation = engine.compute_traced(&input, &mut rng);

    assert_eq!(consultation.result.suggested_names.len(), 20);
    assert_eq!(consultation.trace.rules[0].outcome, RuleOutcome::Discarded);
}

#[test]
fn fixed_gender_repeats_the_same_candidate_set() {
    let engine = engine_with(EngineConfig {
        result_size_mode: ResultSizeMode::Full,
        ..EngineConfig::default()
    });
    let mut input = BirthInput::new(date(2001, 12, 5), Gender::Girl);
    input.starts_with = Some("S".to_string());

    let first = engine.compute(&input, &mut StdRng::seed_from_u64(100));
    let second = engine.compute(&input, &mut StdRng::seed_from_u64(200));

    assert_eq!(name_set(&first), name_set(&second));
}

#[test]
fn unisex_draws_from_both_genders() {
    let engine = default_engine();
    let input = BirthInput::new(date(1995, 5, 5), Gender::Unisex);
    let mut rng = StdRng::seed_from_u64(8);

    let mut boys = 0_usize;
    let runs = 400;
    for _ in 0..runs {
        let consultation = engine.compute_traced(&input, &mut rng);
        if consultation.trace.resolved_gender == namkaran_core::ResolvedGender::Boy {
            boys += 1;
        }
    }

    assert!((140..=260).contains(&boys), "boys: {boys} of {runs}");
}

#[test]
fn full_mode_with_language_partition_returns_whole_partition() {
    let engine = engine_with(EngineConfig {
        result_size_mode: ResultSizeMode::Full,
        localization: Localization::LanguageBased,
        ..EngineConfig::default()
    });
    let mut input = BirthInput::new(date(1988, 1, 30), Gender::Girl);
    input.language = Some("en".to_string());
    let mut rng = StdRng::seed_from_u64(4);

    let consultation = engine.compute_traced(&input, &mut rng);

    assert_eq!(consultation.result.suggested_names.len(), 12);
    assert!(name_set(&consultation.result).contains("Zara"));
    assert_eq!(
        consultation.trace.source.map(|s| s.label),
        Some("en".to_string())
    );
}

// ---------------------------------------------------------------------------
// Saved results
// ---------------------------------------------------------------------------

#[test]
fn computed_result_reopens_unchanged() {
    let engine = default_engine();
    let mut input = BirthInput::new(date(1979, 11, 2), Gender::Boy);
    input.language = Some("hi".to_string());
    let mut rng = StdRng::seed_from_u64(12);

    let result = engine.compute(&input, &mut rng);
    let saved = result.to_saved_json().expect("serialize");
    let reopened = AstrologyResult::from_saved_json(&saved).expect("reopen");

    assert_eq!(reopened, result);
    let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert!(json.get("birthSign").is_some());
    assert!(json.get("suggestedNames").is_some());
}

// ---------------------------------------------------------------------------
// Async entry points
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn concurrent_consultations_share_one_delay() {
    let engine = Arc::new(default_engine());
    let started = Instant::now();

    let mut set = JoinSet::new();
    for seed in 0..32_u64 {
        let engine = Arc::clone(&engine);
        set.spawn(async move {
            let input = BirthInput::new(date(1990, 8, 15), Gender::Unisex);
            engine.compute_delayed(&input, Some(seed)).await
        });
    }
    let mut finished = 0;
    while let Some(joined) = set.join_next().await {
        let consultation = joined.expect("task panicked");
        assert!(!consultation.result.suggested_names.is_empty());
        finished += 1;
    }

    assert_eq!(finished, 32);
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(2000));
    assert!(elapsed < Duration::from_millis(4000), "elapsed: {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn consult_accepts_form_payload() {
    let engine = default_engine();
    let request: BirthRequest = serde_json::from_value(serde_json::json!({
        "birthDate": "1990-08-15",
        "gender": "boy",
        "culturalPreference": "Regional/Cultural Names",
        "nameTheme": "light"
    }))
    .expect("form payload");

    let consultation = engine.consult(request, Some(5)).await.expect("valid request");

    assert_eq!(
        consultation.trace.rules[0].outcome,
        RuleOutcome::Applied { remaining: 1 }
    );
    assert_eq!(
        consultation.trace.source.map(|s| s.label),
        Some("Regional/Cultural Names".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn consult_rejects_bad_gender() {
    let engine = default_engine();
    let request = BirthRequest {
        birth_date: "1990-08-15".to_string(),
        gender: "other".to_string(),
        ..BirthRequest::default()
    };

    let err = engine.consult(request, None).await.unwrap_err();

    assert!(matches!(err, EngineError::InvalidInput(_)));
}
