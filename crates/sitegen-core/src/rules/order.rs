use crate::domain::{BoardMember, Team};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub const DEFAULT_SHUFFLE_SEED: u64 = 12345;

const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233280;

/// Small linear congruential generator. Draws are in `[0, 1)` and repeat
/// exactly for a given seed, so page order survives regeneration.
#[derive(Debug, Clone)]
pub struct SeededRng {
    value: u64,
}

impl SeededRng {
    /// Seeds are reduced into the generator's modulus.
    pub fn new(seed: u64) -> Self {
        Self {
            value: seed % LCG_MODULUS,
        }
    }

    pub fn next_draw(&mut self) -> f64 {
        self.value = (self.value * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.value as f64 / LCG_MODULUS as f64
    }
}

/// Fisher-Yates driven by [`SeededRng`]; independent of the order the
/// filesystem listed the files in.
pub fn deterministic_shuffle<T>(mut items: Vec<T>, seed: u64) -> Vec<T> {
    let mut rng = SeededRng::new(seed);
    for i in (1..items.len()).rev() {
        let j = (rng.next_draw() * (i + 1) as f64).floor() as usize;
        items.swap(i, j);
    }
    items
}

pub fn title_priority(title: Option<&str>) -> u8 {
    let title = title.unwrap_or("");
    if title.contains("Board Member") {
        return 3;
    }
    match title {
        "Chairman" => 1,
        "Treasurer" => 2,
        "Board Advisor" => 4,
        _ => 6,
    }
}

/// Lower-cased with diacritics stripped, so `Åsa` files under `A`.
fn fold_name(name: &str) -> String {
    name.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect::<String>()
        .to_lowercase()
}

/// Accent- and case-insensitive first. Remaining ties put the unaccented
/// spelling first, then lower-case ahead of upper-case.
fn compare_names(a: &str, b: &str) -> Ordering {
    fold_name(a)
        .cmp(&fold_name(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

pub fn sort_board_members(members: &mut [BoardMember]) {
    members.sort_by(|a, b| {
        title_priority(a.title.as_deref())
            .cmp(&title_priority(b.title.as_deref()))
            .then_with(|| {
                compare_names(
                    a.name.as_deref().unwrap_or(""),
                    b.name.as_deref().unwrap_or(""),
                )
            })
    });
}

/// Leading integer of a year field, read the way a lenient integer parse
/// would: optional sign, then digits, anything after is ignored.
pub fn leading_year(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|year| sign * year)
}

/// Newest year first. Teams without a readable year go last; equal years
/// keep their input order.
pub fn sort_teams(teams: &mut [Team]) {
    teams.sort_by(|a, b| {
        let a_year = a.year.as_deref().and_then(leading_year);
        let b_year = b.year.as_deref().and_then(leading_year);
        match (a_year, b_year) {
            (Some(a_year), Some(b_year)) => b_year.cmp(&a_year),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}
