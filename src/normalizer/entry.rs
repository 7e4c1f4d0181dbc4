//! Free-text entry parsing.
//!
//! A bulletin entry arrives as a title and a semicolon-delimited summary.
//! The title carries a fixed boilerplate prefix, the river name, and the
//! station name; the summary carries five threshold triples followed by the
//! two active defense-level names. Anything that does not decompose into
//! that shape is rejected whole; there is no partially parsed reading.

use crate::app::{Result, VodostajError};
use crate::domain::{StationReading, Threshold};

/// Boilerplate prefix length (in characters) on every bulletin title.
const TITLE_PREFIX_CHARS: usize = 6;
/// Width the rendered station name is padded against.
const TITLE_WIDTH: usize = 32;
/// Number of threshold segments in a well-formed summary.
const THRESHOLD_SEGMENTS: usize = 5;
/// Number of defense-level segments following the thresholds.
const DEFENSE_SEGMENTS: usize = 2;

pub fn parse_entry(title: &str, summary: &str) -> Result<StationReading> {
    let (station_key, display_title, group_prefix) = parse_title(title)?;
    let (thresholds, defense_labels) = parse_summary(summary)?;

    // The final threshold slot carries the live reading.
    let current_level_cm = thresholds[THRESHOLD_SEGMENTS - 1].level.clone();

    Ok(StationReading {
        station_key,
        display_title,
        group_prefix,
        thresholds,
        defense_labels,
        current_level_cm,
    })
}

fn parse_title(title: &str) -> Result<(String, String, String)> {
    let body = title
        .char_indices()
        .nth(TITLE_PREFIX_CHARS)
        .map(|(i, _)| &title[i..])
        .ok_or_else(|| malformed(title, "title shorter than its boilerplate prefix"))?;

    let (river_raw, rest) = body
        .split_once(" - ")
        .ok_or_else(|| malformed(title, "title has no river/station separator"))?;

    let river = strip_label(river_raw).trim();
    let name = strip_label(rest).trim();
    if river.is_empty() || name.is_empty() {
        return Err(malformed(title, "empty river or station name"));
    }

    let station_key = format!("{river} - {name}");
    let pad = TITLE_WIDTH.saturating_sub(river.chars().count());
    let display_title = format!("{river} - {name:<pad$}");

    Ok((station_key, display_title, river.to_string()))
}

/// Drops an optional `"<label>: "` prefix from a title fragment.
fn strip_label(fragment: &str) -> &str {
    fragment
        .split_once(": ")
        .map(|(_, rest)| rest)
        .unwrap_or(fragment)
}

fn parse_summary(summary: &str) -> Result<(Vec<Threshold>, (String, String))> {
    let segments: Vec<&str> = summary.split(';').collect();
    if segments.len() < THRESHOLD_SEGMENTS + DEFENSE_SEGMENTS {
        return Err(malformed(summary, "summary has too few segments"));
    }

    let thresholds = segments[..THRESHOLD_SEGMENTS]
        .iter()
        .map(|segment| parse_threshold(segment))
        .collect::<Result<Vec<_>>>()?;

    let defense_labels = (
        clean_defense_label(segments[THRESHOLD_SEGMENTS]),
        clean_defense_label(segments[THRESHOLD_SEGMENTS + 1]),
    );

    Ok((thresholds, defense_labels))
}

/// A threshold segment is `"<label>: <date> <level>"` or
/// `"<label> <date> <level>"`.
fn parse_threshold(segment: &str) -> Result<Threshold> {
    let segment = segment.trim();
    let (label, rest) = match segment.split_once(": ") {
        Some((label, rest)) => (label.trim(), rest),
        None => segment
            .split_once(' ')
            .ok_or_else(|| malformed(segment, "threshold segment has fewer than 3 tokens"))?,
    };

    let mut tokens = rest.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(date), Some(level)) if !label.is_empty() => Ok(Threshold {
            label: label.to_string(),
            date: date.to_string(),
            level: level.to_string(),
        }),
        _ => Err(malformed(segment, "threshold segment has fewer than 3 tokens")),
    }
}

/// Lower-cases a defense-level name and drops its trailing annotation: the
/// span from the first space through the last colon, when a colon follows
/// the space (`"opis1 tag:"` becomes `"opis1"`).
fn clean_defense_label(raw: &str) -> String {
    let label = raw.trim().to_lowercase();
    match (label.find(' '), label.rfind(':')) {
        (Some(space), Some(colon)) if colon > space => {
            let mut cleaned = String::with_capacity(label.len());
            cleaned.push_str(&label[..space]);
            cleaned.push_str(&label[colon + 1..]);
            cleaned
        }
        _ => label,
    }
}

fn malformed(input: &str, reason: &str) -> VodostajError {
    VodostajError::MalformedEntry(format!("{reason}: {input:?}"))
}
