//! `corpus` command: summarize the configured name corpus.

use std::fmt::Write as _;

use namkaran_core::{AppConfig, NameCorpus};

pub(crate) fn render_summary(corpus: &NameCorpus) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Default category: {}", corpus.default_category_label());
    let _ = writeln!(out, "{:<6} {:<9} {:<28} {:>5}", "gender", "kind", "label", "names");
    for s in corpus.summaries() {
        let _ = writeln!(
            out,
            "{:<6} {:<9} {:<28} {:>5}",
            s.gender.to_string(),
            s.kind.to_string(),
            s.label,
            s.count
        );
    }
    out
}

/// # Errors
///
/// Returns an error if the configured corpus cannot be loaded.
pub(crate) fn run_corpus(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let corpus = namkaran_core::load_configured_corpus(config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&corpus.summaries())?);
    } else {
        print!("{}", render_summary(&corpus));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_builtin_partitions() {
        let corpus = NameCorpus::builtin().expect("builtin corpus");
        let text = render_summary(&corpus);
        assert!(text.starts_with("Default category: Sanskrit/Hindu Names\n"));
        assert!(text.contains("boy    category  Sanskrit/Hindu Names            26"));
        assert!(text.contains("girl   language  ta"));
        // header plus default line plus one row per partition
        assert_eq!(text.lines().count(), 2 + corpus.partitions().len());
    }
}
