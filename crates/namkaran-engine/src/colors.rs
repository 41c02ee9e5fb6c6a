//! Stage D: lucky colors keyed by rashi root name.

use crate::sign::ZodiacSign;

pub const FALLBACK_COLORS: [&str; 3] = ["Gold", "Silver", "White"];

const COLOR_TABLE: [(&str, [&str; 3]); 12] = [
    ("Mesha", ["Red", "Orange", "Coral"]),
    ("Vrishabha", ["White", "Green", "Pink"]),
    ("Mithuna", ["Yellow", "Green", "Silver"]),
    ("Karka", ["White", "Silver", "Sea Green"]),
    ("Simha", ["Gold", "Orange", "Red"]),
    ("Kanya", ["Green", "White", "Yellow"]),
    ("Tula", ["White", "Blue", "Pink"]),
    ("Vrishchika", ["Red", "Maroon", "Coral"]),
    ("Dhanu", ["Yellow", "Orange", "Red"]),
    ("Makara", ["Black", "Dark Blue", "Brown"]),
    ("Kumbha", ["Blue", "Cyan", "Electric Blue"]),
    ("Meena", ["Yellow", "Orange", "Pink"]),
];

/// Colors for an exact root name, or the fallback triple.
#[must_use]
pub fn colors_for_root(root: &str) -> [&'static str; 3] {
    COLOR_TABLE
        .iter()
        .find(|(key, _)| *key == root)
        .map_or(FALLBACK_COLORS, |(_, colors)| *colors)
}

/// Recover the root name from a sign label.
///
/// Understands `"सिंह राशि (Simha - Leo)"` (the text between `(` and ` -`),
/// and bare root or Western names such as `"Simha"` or `"Leo"`.
#[must_use]
pub fn root_from_label(label: &str) -> Option<&'static str> {
    let candidate = match label.split_once('(') {
        Some((_, rest)) => rest.split(" -").next().unwrap_or(rest).trim_end_matches(')'),
        None => label,
    };
    ZodiacSign::from_name(candidate).map(ZodiacSign::root_name)
}

/// Three lucky colors for a sign label; unknown labels get [`FALLBACK_COLORS`].
#[must_use]
pub fn lucky_colors(sign_label: &str) -> Vec<String> {
    let colors = root_from_label(sign_label).map_or(FALLBACK_COLORS, colors_for_root);
    colors.iter().map(|c| (*c).to_string()).collect()
}
