//! Aggregates computed over a single page of stored characters.
//!
//! Statistics are scoped to the slice returned by one paginated query,
//! never to the whole table.

use std::collections::BTreeMap;

use serde::Serialize;

/// Distribution key used for records whose attribute is absent.
pub const ABSENT_KEY: &str = "null";

/// The attributes of one record that statistics look at.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatSample<'a> {
    pub gender: Option<&'a str>,
    pub homeworld: Option<&'a str>,
    pub height: Option<&'a str>,
}

/// Statistics for one page, serialized with the camelCase keys clients expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStatistics {
    pub total_in_page: usize,
    pub gender_distribution: BTreeMap<String, i64>,
    pub homeworld_distribution: BTreeMap<String, i64>,
    pub average_height: i64,
}

impl PageStatistics {
    pub fn compute(samples: &[StatSample<'_>]) -> Self {
        Self {
            total_in_page: samples.len(),
            gender_distribution: distribution(samples.iter().map(|s| s.gender)),
            homeworld_distribution: distribution(samples.iter().map(|s| s.homeworld)),
            average_height: average_height(samples.iter().map(|s| s.height)),
        }
    }
}

/// Count occurrences of each value. Absent and empty values share [`ABSENT_KEY`].
pub fn distribution<'a, I>(values: I) -> BTreeMap<String, i64>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts = BTreeMap::new();
    for value in values {
        let key = match value {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => ABSENT_KEY.to_string(),
        };
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Mean of all heights that parse as integers, rounded to the nearest integer.
///
/// Unparseable and absent heights are excluded from both the sum and the
/// count. Returns 0 when nothing parses. The sum is accumulated in `i128`
/// so heights near `i64::MAX` cannot overflow it.
pub fn average_height<'a, I>(heights: I) -> i64
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let parsed: Vec<i64> = heights.into_iter().flatten().filter_map(leading_int).collect();
    if parsed.is_empty() {
        return 0;
    }
    let sum: i128 = parsed.iter().map(|&h| i128::from(h)).sum();
    (sum as f64 / parsed.len() as f64).round() as i64
}

/// Parse the leading integer of a string (`"172"`, `" 96cm"`, `"-3"`).
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Returns `None` when no digit is found.
fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
