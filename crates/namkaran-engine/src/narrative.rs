//! Stage F: narrative and recommendation sentences.
//!
//! Templates use `{sign}`, `{mansion}` and `{color}` placeholders. Sentences
//! that mention the mansion are skipped when no mansion label is supplied.

use std::fmt;

/// Template sets that exist. Anything else renders in English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Hindi,
}

impl Language {
    /// Map a language selector to a template set; unknown or missing
    /// selectors fall back to English.
    #[must_use]
    pub fn resolve(selector: Option<&str>) -> Self {
        match selector.map(namkaran_core::language_code).as_deref() {
            Some("hi") => Self::Hindi,
            _ => Self::English,
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }

    fn templates(self) -> &'static TemplateSet {
        match self {
            Self::English => &ENGLISH,
            Self::Hindi => &HINDI,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

struct TemplateSet {
    influence: &'static str,
    influence_sign_only: &'static str,
    recommendations: [&'static str; 5],
}

const ENGLISH: TemplateSet = TemplateSet {
    influence: "Born under {sign} with the {mansion} nakshatra, your child shows the qualities of leadership and creativity.",
    influence_sign_only: "Born under {sign}, your child shows the qualities of leadership and creativity.",
    recommendations: [
        "Choosing a name in harmony with the {mansion} nakshatra will bring spiritual benefit.",
        "{color} is auspicious for this rashi and will bring good fortune to your child's life.",
        "The birth chart points to keen intelligence and strong prospects of success.",
        "Holding the naming ceremony at an auspicious muhurat will bring greater rewards.",
        "By Vedic astrology, this child has the potential to accomplish great things.",
    ],
};

const HINDI: TemplateSet = TemplateSet {
    influence: "जन्म राशि {sign} और नक्षत्र {mansion} के अनुसार, आपके बच्चे में नेतृत्व की क्षमता और रचनात्मकता के गुण हैं।",
    influence_sign_only: "जन्म राशि {sign} के अनुसार, आपके बच्चे में नेतृत्व की क्षमता और रचनात्मकता के गुण हैं।",
    recommendations: [
        "नक्षत्र {mansion} के अनुसार नाम चुनने से बच्चे को आध्यात्मिक लाभ मिलेगा।",
        "राशि के अनुसार {color} रंग बच्चे के जीवन में शुभता लाएगा।",
        "जन्म कुंडली के अनुसार बच्चे में उत्कृष्ट बुद्धि और सफलता की संभावनाएं हैं।",
        "नामकरण संस्कार शुभ मुहूर्त में करवाने से अधिक फल मिलेगा।",
        "वैदिक ज्योतिष के अनुसार यह बच्चा भविष्य में महान कार्य करने की क्षमता रखता है।",
    ],
};

/// Rendered output of stage F.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    pub planetary_influence: String,
    pub recommendations: Vec<String>,
}

/// Render the narrative sentence and 3-5 recommendations.
///
/// With `mansion_label` set to `None` the sign-only sentence is used and
/// mansion recommendations are dropped.
#[must_use]
pub fn assemble(
    sign_label: &str,
    mansion_label: Option<&str>,
    color: &str,
    language: Language,
) -> Narrative {
    let set = language.templates();
    let render = |template: &str| {
        template
            .replace("{sign}", sign_label)
            .replace("{mansion}", mansion_label.unwrap_or_default())
            .replace("{color}", color)
    };

    let planetary_influence = match mansion_label {
        Some(_) => render(set.influence),
        None => render(set.influence_sign_only),
    };
    let recommendations = set
        .recommendations
        .iter()
        .filter(|t| mansion_label.is_some() || !t.contains("{mansion}"))
        .map(|t| render(t))
        .collect();

    Narrative {
        planetary_influence,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_falls_back_to_english() {
        assert_eq!(Language::resolve(None), Language::English);
        assert_eq!(Language::resolve(Some("ta")), Language::English);
        assert_eq!(Language::resolve(Some("")), Language::English);
        assert_eq!(Language::resolve(Some(" HI ")), Language::Hindi);
        assert_eq!(Language::resolve(Some("Hindi")), Language::Hindi);
    }

    #[test]
    fn hindi_narrative_substitutes_labels() {
        let narrative = assemble(
            "सिंह राशि (Simha - Leo)",
            Some("मघा (Magha)"),
            "Gold",
            Language::Hindi,
        );
        assert_eq!(
            narrative.planetary_influence,
            "जन्म राशि सिंह राशि (Simha - Leo) और नक्षत्र मघा (Magha) के अनुसार, आपके बच्चे में नेतृत्व की क्षमता और रचनात्मकता के गुण हैं।"
        );
        assert_eq!(narrative.recommendations.len(), 5);
        assert!(narrative.recommendations[0].contains("मघा (Magha)"));
        assert!(narrative.recommendations[1].contains("Gold"));
    }

    #[test]
    fn english_sentences_have_no_placeholders_left() {
        let narrative = assemble("Leo", Some("Magha"), "Gold", Language::English);
        assert!(narrative.planetary_influence.starts_with("Born under Leo with the Magha"));
        for sentence in std::iter::once(&narrative.planetary_influence)
            .chain(narrative.recommendations.iter())
        {
            assert!(!sentence.contains('{'), "unrendered: {sentence}");
        }
    }

    #[test]
    fn without_mansion_uses_sign_only_variant() {
        for language in [Language::English, Language::Hindi] {
            let narrative = assemble("Leo", None, "Gold", language);
            assert!(!narrative.planetary_influence.contains("{mansion}"));
            assert_eq!(narrative.recommendations.len(), 4, "{language}");
            assert!((3..=5).contains(&narrative.recommendations.len()));
        }
        let english = assemble("Leo", None, "Gold", Language::English);
        assert_eq!(
            english.planetary_influence,
            "Born under Leo, your child shows the qualities of leadership and creativity."
        );
    }
}
