//! Numeric-aware ordering for output lines.
//!
//! Lines are split into alternating runs of digits and non-digits. Digit runs
//! compare as integers, everything else as text, so `10.2.0.0/24` sorts before
//! `10.10.0.0/24`.

use crate::models::RelationshipRecord;
use itertools::Itertools;
use std::cmp::Ordering;

/// A run of ASCII digits compared by numeric value, without a width limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits(String);

impl Digits {
    fn new(run: &str) -> Self {
        Digits(run.trim_start_matches('0').to_string())
    }
}

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        // leading zeros are stripped, so a longer run is a larger number
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One run of a sort key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyPart {
    Text(String),
    Number(Digits),
}

/// Split a line into its sort key.
///
/// The key always starts with a text run (empty if the line starts with a digit),
/// so runs of the same kind line up position by position across keys.
pub fn natural_key(line: &str) -> Vec<KeyPart> {
    let mut key = Vec::new();
    let runs = line.chars().chunk_by(|c| c.is_ascii_digit());
    for (is_digit, run) in &runs {
        let run: String = run.collect();
        if is_digit {
            if key.is_empty() {
                key.push(KeyPart::Text(String::new()));
            }
            key.push(KeyPart::Number(Digits::new(&run)));
        } else {
            key.push(KeyPart::Text(run));
        }
    }
    key
}

/// Sort records by the numeric-aware key of their rendered CSV line.
///
/// Lines with equal keys fall back to plain string order.
pub fn sort_records(records: &mut [RelationshipRecord]) {
    records.sort_by_cached_key(|r| {
        let line = r.to_string();
        (natural_key(&line), line)
    });
}
