//! Stage E: name selection.
//!
//! Candidate resolution picks one corpus partition, then an ordered list of
//! [`FallbackRule`]s narrows or widens it. Filters that would leave nothing
//! are discarded rather than applied, and a short list is topped up from the
//! gender's cultural categories, so a gender with any names never yields an
//! empty selection. Each rule's outcome is recorded in a [`SelectionTrace`].

use std::collections::HashSet;

use namkaran_core::{
    Gender, Localization, NameCorpus, NameRecord, PartitionKind, ResolvedGender, ResultSizeMode,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::types::{BirthInput, NameSuggestion};

/// Below this many candidates the list is topped up.
pub const MIN_CANDIDATES: usize = 10;
/// Cap in [`ResultSizeMode::Bounded`].
pub const MAX_BOUNDED_RESULTS: usize = 20;

const SCORE_RANGE: std::ops::RangeInclusive<u8> = 8..=10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackRule {
    /// Keep names beginning with the letter. Discarded if nothing matches.
    StartsWith(String),
    /// Keep names whose meaning or name contains any keyword. Discarded if
    /// nothing matches.
    Theme(Vec<String>),
    /// Append the gender's other names when fewer than `min` remain: the
    /// source language partition first, if that is where candidates came
    /// from, then every cultural category.
    TopUp { min: usize },
}

impl FallbackRule {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::StartsWith(_) => "starts_with",
            Self::Theme(_) => "theme",
            Self::TopUp { .. } => "top_up",
        }
    }

    /// Rules implied by the input, in evaluation order.
    #[must_use]
    pub fn plan(input: &BirthInput) -> Vec<Self> {
        let mut rules = Vec::with_capacity(3);
        if let Some(letter) = input.starts_with.as_deref().filter(|s| !s.trim().is_empty()) {
            rules.push(Self::StartsWith(letter.trim().to_string()));
        }
        if let Some(theme) = input.theme.as_deref() {
            let keywords = theme_keywords(theme);
            if !keywords.is_empty() {
                rules.push(Self::Theme(keywords));
            }
        }
        rules.push(Self::TopUp {
            min: MIN_CANDIDATES,
        });
        rules
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RuleOutcome {
    /// The rule changed the list; `remaining` is the size afterwards.
    Applied { remaining: usize },
    /// A filter matched nothing and was ignored.
    Discarded,
    /// The rule's trigger condition did not hold.
    NotNeeded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleReport {
    pub rule: &'static str,
    #[serde(flatten)]
    pub outcome: RuleOutcome,
}

/// Where the initial candidate list came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSource {
    pub kind: PartitionKind,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionTrace {
    pub requested_gender: Gender,
    pub resolved_gender: ResolvedGender,
    pub source: Option<CandidateSource>,
    pub rules: Vec<RuleReport>,
}

#[derive(Debug, Clone)]
pub struct Selection {
    pub names: Vec<NameSuggestion>,
    pub trace: SelectionTrace,
}

/// Unisex requests flip an unweighted coin; boy and girl pass through.
pub fn resolve_gender<R: Rng + ?Sized>(gender: Gender, rng: &mut R) -> ResolvedGender {
    gender.fixed().unwrap_or_else(|| {
        if rng.random_bool(0.5) {
            ResolvedGender::Boy
        } else {
            ResolvedGender::Girl
        }
    })
}

/// Initial candidate list: language partition (language-based localization
/// only), then the requested cultural category, then the default category.
#[must_use]
pub fn resolve_candidates(
    corpus: &NameCorpus,
    gender: ResolvedGender,
    input: &BirthInput,
    localization: Localization,
) -> (Vec<NameRecord>, Option<CandidateSource>) {
    let by_language = match localization {
        Localization::LanguageBased => input
            .language
            .as_deref()
            .and_then(|code| corpus.language(gender, code)),
        Localization::CorpusBased => None,
    };

    let partition = by_language
        .or_else(|| {
            input
                .cultural_category
                .as_deref()
                .and_then(|label| corpus.category(gender, label))
        })
        .or_else(|| corpus.default_category(gender));

    match partition {
        Some(p) => (
            p.names.clone(),
            Some(CandidateSource {
                kind: p.kind,
                label: p.label.clone(),
            }),
        ),
        None => (Vec::new(), None),
    }
}

/// Lowercased whitespace-separated words of a theme preference.
#[must_use]
pub fn theme_keywords(theme: &str) -> Vec<String> {
    theme.split_whitespace().map(str::to_lowercase).collect()
}

/// Whether `name` begins with `letter`, case-insensitively.
///
/// Both the display name and any parenthesized transliteration inside it are
/// checked, so `"आर्यन (Aryan)"` matches both `आ` and `a`.
#[must_use]
pub fn matches_initial(name: &str, letter: &str) -> bool {
    let letter = letter.trim().to_lowercase();
    if letter.is_empty() {
        return true;
    }
    std::iter::once(name)
        .chain(transliterations(name))
        .any(|form| form.trim().to_lowercase().starts_with(&letter))
}

fn transliterations(name: &str) -> impl Iterator<Item = &str> {
    name.split('(')
        .skip(1)
        .filter_map(|segment| segment.split_once(')').map(|(inner, _)| inner))
}

#[must_use]
pub fn matches_theme(record: &NameRecord, keywords: &[String]) -> bool {
    let meaning = record.meaning.to_lowercase();
    let name = record.name.to_lowercase();
    keywords
        .iter()
        .any(|kw| meaning.contains(kw.as_str()) || name.contains(kw.as_str()))
}

/// Evaluate `rules` in order against `candidates`, which were drawn from
/// `source`.
#[must_use]
pub fn apply_rules(
    mut candidates: Vec<NameRecord>,
    rules: &[FallbackRule],
    corpus: &NameCorpus,
    gender: ResolvedGender,
    source: Option<&CandidateSource>,
) -> (Vec<NameRecord>, Vec<RuleReport>) {
    let mut reports = Vec::with_capacity(rules.len());

    for rule in rules {
        let outcome = match rule {
            FallbackRule::StartsWith(letter) => {
                narrow(&mut candidates, |r| matches_initial(&r.name, letter))
            }
            FallbackRule::Theme(keywords) => narrow(&mut candidates, |r| matches_theme(r, keywords)),
            FallbackRule::TopUp { min } => top_up(&mut candidates, *min, corpus, gender, source),
        };

        if outcome == RuleOutcome::Discarded {
            tracing::debug!(rule = rule.name(), "filter matched no names; ignoring it");
        }
        reports.push(RuleReport {
            rule: rule.name(),
            outcome,
        });
    }

    (candidates, reports)
}

fn narrow<F>(candidates: &mut Vec<NameRecord>, keep: F) -> RuleOutcome
where
    F: Fn(&NameRecord) -> bool,
{
    let filtered: Vec<NameRecord> = candidates.iter().filter(|r| keep(*r)).cloned().collect();
    if filtered.is_empty() {
        RuleOutcome::Discarded
    } else {
        *candidates = filtered;
        RuleOutcome::Applied {
            remaining: candidates.len(),
        }
    }
}

fn top_up(
    candidates: &mut Vec<NameRecord>,
    min: usize,
    corpus: &NameCorpus,
    gender: ResolvedGender,
    source: Option<&CandidateSource>,
) -> RuleOutcome {
    if candidates.len() >= min {
        return RuleOutcome::NotNeeded;
    }

    let source_language = source
        .filter(|s| s.kind == PartitionKind::Language)
        .and_then(|s| corpus.language(gender, &s.label))
        .into_iter()
        .flat_map(|p| p.names.iter());

    let mut seen: HashSet<String> = candidates.iter().map(|r| r.name.clone()).collect();
    for record in source_language.chain(corpus.category_records(gender)) {
        if seen.insert(record.name.clone()) {
            candidates.push(record.clone());
        }
    }

    RuleOutcome::Applied {
        remaining: candidates.len(),
    }
}

/// Shuffle, cap according to `mode`, and attach a score from 8..=10 to each.
pub fn finalize<R: Rng + ?Sized>(
    mut candidates: Vec<NameRecord>,
    mode: ResultSizeMode,
    rng: &mut R,
) -> Vec<NameSuggestion> {
    candidates.shuffle(rng);
    if mode == ResultSizeMode::Bounded {
        candidates.truncate(MAX_BOUNDED_RESULTS);
    }
    candidates
        .into_iter()
        .map(|r| NameSuggestion {
            name: r.name,
            meaning: r.meaning,
            origin: r.origin,
            score: rng.random_range(SCORE_RANGE),
        })
        .collect()
}

/// Run the whole of stage E.
pub fn select_names<R: Rng + ?Sized>(
    corpus: &NameCorpus,
    input: &BirthInput,
    mode: ResultSizeMode,
    localization: Localization,
    rng: &mut R,
) -> Selection {
    let resolved_gender = resolve_gender(input.gender, rng);
    let (candidates, source) = resolve_candidates(corpus, resolved_gender, input, localization);
    tracing::debug!(
        gender = %resolved_gender,
        source = source.as_ref().map_or("none", |s| s.label.as_str()),
        candidates = candidates.len(),
        "resolved candidate names"
    );

    let rules = FallbackRule::plan(input);
    let (candidates, reports) =
        apply_rules(candidates, &rules, corpus, resolved_gender, source.as_ref());
    let names = finalize(candidates, mode, rng);

    Selection {
        names,
        trace: SelectionTrace {
            requested_gender: input.gender,
            resolved_gender,
            source,
            rules: reports,
        },
    }
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;
