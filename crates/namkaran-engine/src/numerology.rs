//! Stage C: lucky numbers.

use chrono::{Datelike, NaiveDate};

/// Reduce to 1..=9 by `mod 9`, mapping a zero remainder to 9.
#[must_use]
pub fn reduce(value: u32) -> u8 {
    let rem = u8::try_from(value % 9).unwrap_or(0);
    if rem == 0 {
        9
    } else {
        rem
    }
}

#[must_use]
pub fn birth_number(date: NaiveDate) -> u8 {
    reduce(date.day())
}

#[must_use]
pub fn life_path_number(date: NaiveDate) -> u8 {
    #[allow(clippy::cast_sign_loss)]
    let year_part = date.year().rem_euclid(1000) as u32;
    reduce(date.day() + date.month() + year_part)
}

/// `(label length mod 9) + 1`, with the length counted in UTF-16 code units.
#[must_use]
pub fn mansion_number(mansion_label: &str) -> u8 {
    let len = mansion_label.encode_utf16().count();
    u8::try_from(len % 9).unwrap_or(0) + 1
}

/// Birth, life-path and mansion numbers, deduplicated in first-occurrence
/// order. Between one and three entries, each in 1..=9.
#[must_use]
pub fn lucky_numbers(date: NaiveDate, mansion_label: &str) -> Vec<u8> {
    let mut numbers = Vec::with_capacity(3);
    for n in [
        birth_number(date),
        life_path_number(date),
        mansion_number(mansion_label),
    ] {
        if !numbers.contains(&n) {
            numbers.push(n);
        }
    }
    numbers.truncate(3);
    numbers
}
