//! Stage A: calendar-date sign buckets.
//!
//! Twelve fixed month/day ranges following the tropical zodiac convention.
//! This is a labeling scheme, not an astronomical computation. Buckets are
//! tested in declaration order and Pisces takes whatever is left.

use chrono::{Datelike, NaiveDate};
use namkaran_core::LabelStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All signs, Aries first.
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// `(sign, (start_month, start_day), (end_month, end_day))`, both ends inclusive.
const BOUNDARIES: [(ZodiacSign, (u32, u32), (u32, u32)); 11] = [
    (ZodiacSign::Aries, (3, 21), (4, 19)),
    (ZodiacSign::Taurus, (4, 20), (5, 20)),
    (ZodiacSign::Gemini, (5, 21), (6, 20)),
    (ZodiacSign::Cancer, (6, 21), (7, 22)),
    (ZodiacSign::Leo, (7, 23), (8, 22)),
    (ZodiacSign::Virgo, (8, 23), (9, 22)),
    (ZodiacSign::Libra, (9, 23), (10, 22)),
    (ZodiacSign::Scorpio, (10, 23), (11, 21)),
    (ZodiacSign::Sagittarius, (11, 22), (12, 21)),
    (ZodiacSign::Capricorn, (12, 22), (1, 19)),
    (ZodiacSign::Aquarius, (1, 20), (2, 18)),
];

impl ZodiacSign {
    #[must_use]
    pub fn western_name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Romanized rashi name; the key of the lucky-color table.
    #[must_use]
    pub fn root_name(self) -> &'static str {
        match self {
            Self::Aries => "Mesha",
            Self::Taurus => "Vrishabha",
            Self::Gemini => "Mithuna",
            Self::Cancer => "Karka",
            Self::Leo => "Simha",
            Self::Virgo => "Kanya",
            Self::Libra => "Tula",
            Self::Scorpio => "Vrishchika",
            Self::Sagittarius => "Dhanu",
            Self::Capricorn => "Makara",
            Self::Aquarius => "Kumbha",
            Self::Pisces => "Meena",
        }
    }

    #[must_use]
    pub fn devanagari_name(self) -> &'static str {
        match self {
            Self::Aries => "मेष",
            Self::Taurus => "वृषभ",
            Self::Gemini => "मिथुन",
            Self::Cancer => "कर्क",
            Self::Leo => "सिंह",
            Self::Virgo => "कन्या",
            Self::Libra => "तुला",
            Self::Scorpio => "वृश्चिक",
            Self::Sagittarius => "धनु",
            Self::Capricorn => "मकर",
            Self::Aquarius => "कुम्भ",
            Self::Pisces => "मीन",
        }
    }

    /// Display label in the requested style.
    #[must_use]
    pub fn label(self, style: LabelStyle) -> String {
        match style {
            LabelStyle::Romanized => self.western_name().to_string(),
            LabelStyle::Bilingual => format!(
                "{} राशि ({} - {})",
                self.devanagari_name(),
                self.root_name(),
                self.western_name()
            ),
        }
    }

    /// Look a sign up by its root or Western name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_SIGNS.into_iter().find(|sign| {
            sign.root_name().eq_ignore_ascii_case(name) || sign.western_name().eq_ignore_ascii_case(name)
        })
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.western_name())
    }
}

fn in_range(month: u32, day: u32, start: (u32, u32), end: (u32, u32)) -> bool {
    (month == start.0 && day >= start.1) || (month == end.0 && day <= end.1)
}

/// Classify a calendar date into its sign bucket.
#[must_use]
pub fn derive_sign(date: NaiveDate) -> ZodiacSign {
    let (month, day) = (date.month(), date.day());
    BOUNDARIES
        .iter()
        .find(|(_, start, end)| in_range(month, day, *start, *end))
        .map_or(ZodiacSign::Pisces, |(sign, _, _)| *sign)
}
