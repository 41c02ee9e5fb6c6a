//! Plain-text rendering of results, and the `show` command.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use namkaran_engine::{AstrologyResult, RuleOutcome, SelectionTrace};

pub(crate) fn render_report(result: &AstrologyResult) -> String {
    let mut out = String::new();
    let join_numbers = result
        .lucky_numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let _ = writeln!(out, "Birth sign:    {}", result.birth_sign);
    if let Some(nakshatra) = &result.nakshatra {
        let _ = writeln!(out, "Nakshatra:     {nakshatra}");
    }
    let _ = writeln!(out, "Lucky numbers: {join_numbers}");
    let _ = writeln!(out, "Lucky colors:  {}", result.lucky_colors.join(", "));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", result.planetary_influence);
    let _ = writeln!(out);

    let _ = writeln!(out, "Suggested names ({}):", result.suggested_names.len());
    for name in &result.suggested_names {
        let _ = writeln!(
            out,
            "  {:>2}/10  {}  {} [{}]",
            name.score, name.name, name.meaning, name.origin
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Recommendations:");
    for (i, rec) in result.recommendations.iter().enumerate() {
        let _ = writeln!(out, "  {}. {rec}", i + 1);
    }
    out
}

pub(crate) fn render_trace(trace: &SelectionTrace) -> String {
    let mut out = String::new();
    let source = trace
        .source
        .as_ref()
        .map_or_else(|| "none".to_string(), |s| format!("{} '{}'", s.kind, s.label));

    let _ = writeln!(
        out,
        "Selection: requested {}, resolved {}, from {source}",
        trace.requested_gender, trace.resolved_gender
    );
    for report in &trace.rules {
        let outcome = match report.outcome {
            RuleOutcome::Applied { remaining } => format!("applied, {remaining} remaining"),
            RuleOutcome::Discarded => "discarded (no matches)".to_string(),
            RuleOutcome::NotNeeded => "not needed".to_string(),
        };
        let _ = writeln!(out, "  {:<12} {outcome}", report.rule);
    }
    out
}

/// Print a previously saved result.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a saved result.
pub(crate) fn run_show(path: &Path, json: bool) -> anyhow::Result<()> {
    let payload = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let result = AstrologyResult::from_saved_json(&payload)
        .with_context(|| format!("{} is not a saved consultation", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&result));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use namkaran_core::{Gender, PartitionKind, ResolvedGender};
    use namkaran_engine::selection::{CandidateSource, RuleReport};
    use namkaran_engine::NameSuggestion;

    use super::*;

    fn sample() -> AstrologyResult {
        AstrologyResult {
            birth_sign: "Leo".to_string(),
            nakshatra: Some("Magha".to_string()),
            lucky_numbers: vec![6, 7, 3],
            lucky_colors: vec!["Gold".into(), "Orange".into(), "Red".into()],
            suggested_names: vec![NameSuggestion {
                name: "Dev".to_string(),
                meaning: "Divine".to_string(),
                origin: "Sanskrit".to_string(),
                score: 9,
            }],
            planetary_influence: "Born under Leo.".to_string(),
            recommendations: vec!["Gold brings luck.".to_string()],
        }
    }

    #[test]
    fn report_lists_every_section() {
        let text = render_report(&sample());
        assert!(text.contains("Birth sign:    Leo"));
        assert!(text.contains("Nakshatra:     Magha"));
        assert!(text.contains("Lucky numbers: 6, 7, 3"));
        assert!(text.contains("Lucky colors:  Gold, Orange, Red"));
        assert!(text.contains(" 9/10  Dev  Divine [Sanskrit]"));
        assert!(text.contains("  1. Gold brings luck."));
    }

    #[test]
    fn report_omits_missing_nakshatra() {
        let mut result = sample();
        result.nakshatra = None;
        assert!(!render_report(&result).contains("Nakshatra"));
    }

    #[test]
    fn trace_shows_rule_outcomes() {
        let trace = SelectionTrace {
            requested_gender: Gender::Unisex,
            resolved_gender: ResolvedGender::Girl,
            source: Some(CandidateSource {
                kind: PartitionKind::Category,
                label: "Sanskrit/Hindu Names".to_string(),
            }),
            rules: vec![
                RuleReport {
                    rule: "starts_with",
                    outcome: RuleOutcome::Discarded,
                },
                RuleReport {
                    rule: "top_up",
                    outcome: RuleOutcome::NotNeeded,
                },
            ],
        };
        let text = render_trace(&trace);
        assert!(text.contains("requested unisex, resolved girl, from category 'Sanskrit/Hindu Names'"));
        assert!(text.contains("starts_with  discarded (no matches)"));
        assert!(text.contains("top_up       not needed"));
    }

    #[test]
    fn show_rejects_non_result_json() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        std::fs::write(file.path(), r#"{"hello": "world"}"#).expect("write");
        let err = run_show(file.path(), false).unwrap_err();
        assert!(format!("{err:#}").contains("is not a saved consultation"));
    }

    #[test]
    fn show_missing_file_fails() {
        let err = run_show(Path::new("/nonexistent/result.json"), true).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
