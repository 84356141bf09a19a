//! Fixed-pattern extraction of numeric fields from the provider's
//! human-readable leader strings, one pattern per stat category.

use super::StatLine;
use regex::Regex;
use std::sync::LazyLock;

// Patterns compiled once; the provider formats are stable per category.
static RE_PASSING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)/(\d+),\s*(\d+)\s*YDS,\s*(\d+)\s*TD(?:,\s*(\d+)\s*INT)?").unwrap()
});
static RE_RUSHING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*CAR,\s*(\d+)\s*YDS(?:,\s*(\d+)\s*TD)?").unwrap());
static RE_RECEIVING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*REC,\s*(\d+)\s*YDS(?:,\s*(\d+)\s*TD)?").unwrap());

/// Parse one leader display string for the given category. Unknown
/// categories and unmatched strings yield None; the entry is skipped.
pub fn parse_leader_line(category: &str, display_value: &str) -> Option<StatLine> {
    match category {
        "passingYards" => parse_passing(display_value),
        "rushingYards" => parse_rushing(display_value),
        "receivingYards" => parse_receiving(display_value),
        _ => None,
    }
}

/// "13/19, 183 YDS, 1 TD, 1 INT" — the INT clause is optional, defaulting 0.
fn parse_passing(s: &str) -> Option<StatLine> {
    let caps = RE_PASSING.captures(s)?;
    Some(StatLine::Passing {
        completions: Some(field(&caps, 1)?),
        attempts: Some(field(&caps, 2)?),
        passing_yards: field(&caps, 3)?,
        passing_tds: field(&caps, 4)?,
        passing_ints: Some(field(&caps, 5).unwrap_or(0)),
    })
}

/// "11 CAR, 107 YDS, 1 TD" — the TD clause is optional, defaulting 0.
fn parse_rushing(s: &str) -> Option<StatLine> {
    let caps = RE_RUSHING.captures(s)?;
    Some(StatLine::Rushing {
        rushing_attempts: field(&caps, 1)?,
        rushing_yards: field(&caps, 2)?,
        rushing_tds: field(&caps, 3).unwrap_or(0),
    })
}

/// "5 REC, 87 YDS, 1 TD" — the TD clause is optional, defaulting 0.
fn parse_receiving(s: &str) -> Option<StatLine> {
    let caps = RE_RECEIVING.captures(s)?;
    Some(StatLine::Receiving {
        receiving_catches: field(&caps, 1)?,
        receiving_yards: field(&caps, 2)?,
        receiving_tds: field(&caps, 3).unwrap_or(0),
    })
}

fn field(caps: &regex::Captures<'_>, i: usize) -> Option<i64> {
    caps.get(i).and_then(|m| m.as_str().parse().ok())
}
