//! Stage B: lunar mansion (nakshatra) approximation.
//!
//! A true nakshatra depends on the Moon's sidereal longitude. This module
//! instead spreads the 27 mansions evenly over a 365-day year using the
//! ordinal day of the birth date. Day 365 of a common year and days 365-366
//! of a leap year wrap back to index 0.

use chrono::{Datelike, NaiveDate};
use namkaran_core::LabelStyle;

pub const MANSION_COUNT: usize = 27;

/// `(devanagari, romanized)` from Ashwini to Revati.
const MANSIONS: [(&str, &str); MANSION_COUNT] = [
    ("अश्विनी", "Ashwini"),
    ("भरणी", "Bharani"),
    ("कृत्तिका", "Krittika"),
    ("रोहिणी", "Rohini"),
    ("मृगशिरा", "Mrigashira"),
    ("आर्द्रा", "Ardra"),
    ("पुनर्वसु", "Punarvasu"),
    ("पुष्य", "Pushya"),
    ("आश्लेषा", "Ashlesha"),
    ("मघा", "Magha"),
    ("पूर्वाफाल्गुनी", "Purva Phalguni"),
    ("उत्तराफाल्गुनी", "Uttara Phalguni"),
    ("हस्त", "Hasta"),
    ("चित्रा", "Chitra"),
    ("स्वाती", "Swati"),
    ("विशाखा", "Vishakha"),
    ("अनुराधा", "Anuradha"),
    ("ज्येष्ठा", "Jyeshtha"),
    ("मूल", "Mula"),
    ("पूर्वाषाढ़ा", "Purva Ashadha"),
    ("उत्तराषाढ़ा", "Uttara Ashadha"),
    ("श्रवण", "Shravana"),
    ("धनिष्ठा", "Dhanishta"),
    ("शतभिषा", "Shatabhisha"),
    ("पूर्वाभाद्रपद", "Purva Bhadrapada"),
    ("उत्तराभाद्रपद", "Uttara Bhadrapada"),
    ("रेवती", "Revati"),
];

/// A mansion by its position in the fixed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarMansion(usize);

impl LunarMansion {
    /// # Panics
    ///
    /// Panics if `index >= 27`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < MANSION_COUNT, "mansion index {index} out of range");
        Self(index)
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    #[must_use]
    pub fn romanized_name(self) -> &'static str {
        MANSIONS[self.0].1
    }

    #[must_use]
    pub fn devanagari_name(self) -> &'static str {
        MANSIONS[self.0].0
    }

    #[must_use]
    pub fn label(self, style: LabelStyle) -> String {
        match style {
            LabelStyle::Romanized => self.romanized_name().to_string(),
            LabelStyle::Bilingual => {
                format!("{} ({})", self.devanagari_name(), self.romanized_name())
            }
        }
    }
}

/// 1-based ordinal day within the date's own year.
#[must_use]
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// `floor(day_of_year * 27 / 365) mod 27`.
#[must_use]
pub fn mansion_index(date: NaiveDate) -> usize {
    let day = day_of_year(date) as usize;
    (day * MANSION_COUNT / 365) % MANSION_COUNT
}

#[must_use]
pub fn derive_mansion(date: NaiveDate) -> LunarMansion {
    LunarMansion(mansion_index(date))
}
