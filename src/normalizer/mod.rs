pub mod entry;

use feed_rs::parser;
use html_escape::decode_html_entities;

use crate::app::{Result, VodostajError};
use crate::domain::StationReading;

/// Unwraps a raw bulletin payload into structured station readings.
///
/// The payload is an Atom feed; each entry's title and summary are decoded
/// and handed to [`entry::parse_entry`]. The first malformed entry aborts
/// the whole run; a partially parsed bulletin is never returned.
#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, body: &[u8]) -> Result<Vec<StationReading>> {
        let feed = parser::parse(body).map_err(|e| VodostajError::FeedParse(e.to_string()))?;

        feed.entries
            .into_iter()
            .map(|entry| {
                let title = entry
                    .title
                    .map(|t| decode_html_entities(&t.content).to_string())
                    .ok_or_else(|| {
                        VodostajError::MalformedEntry("entry without a title".into())
                    })?;
                let summary = entry
                    .summary
                    .map(|s| decode_html_entities(&s.content).to_string())
                    .ok_or_else(|| {
                        VodostajError::MalformedEntry(format!("entry {title:?} without a summary"))
                    })?;

                entry::parse_entry(&title, &summary)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATOM_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Prognoza vodostaja</title>
  <entry>
    <title>012345: DUNAV - NOVI SAD</title>
    <id>station-42035</id>
    <updated>2026-08-04T06:00:00Z</updated>
    <summary>Vodostaj 04.08. 321;Maksimalni vodostaj: 14.04.2006. 778;Redovna odbrana: - 600;Vanredna odbrana: - 700;Prognoza: 05.08. 123;redovna odbrana nije na snazi:;vanredna odbrana nije na snazi:</summary>
  </entry>
  <entry>
    <title>012346: TISA - SENTA</title>
    <id>station-44020</id>
    <updated>2026-08-04T06:00:00Z</updated>
    <summary>Vodostaj 04.08. 150;Maksimalni vodostaj: 20.04.2006. 810;Redovna odbrana: - 650;Vanredna odbrana: - 750;Prognoza: 05.08. 148;redovna odbrana nije na snazi:;vanredna odbrana nije na snazi:</summary>
  </entry>
</feed>"#;

    const ATOM_MISSING_SUMMARY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Prognoza vodostaja</title>
  <entry>
    <title>012345: DUNAV - NOVI SAD</title>
    <id>station-42035</id>
    <updated>2026-08-04T06:00:00Z</updated>
  </entry>
</feed>"#;

    #[test]
    fn test_normalize_bulletin_feed() {
        let normalizer = Normalizer::new();
        let readings = normalizer.normalize(ATOM_SAMPLE.as_bytes()).unwrap();

        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].station_key, "DUNAV - NOVI SAD");
        assert_eq!(readings[0].current_level_cm, "123");
        assert_eq!(readings[1].station_key, "TISA - SENTA");
        assert_eq!(readings[1].current_level_cm, "148");
        assert_eq!(
            readings[0].defense_labels,
            ("redovna".to_string(), "vanredna".to_string())
        );
    }

    #[test]
    fn test_entry_without_summary_fails() {
        let normalizer = Normalizer::new();
        let err = normalizer.normalize(ATOM_MISSING_SUMMARY.as_bytes()).unwrap_err();
        assert!(matches!(err, VodostajError::MalformedEntry(_)));
    }

    #[test]
    fn test_garbage_payload_fails() {
        let normalizer = Normalizer::new();
        let err = normalizer.normalize(b"not a feed at all").unwrap_err();
        assert!(matches!(err, VodostajError::FeedParse(_)));
    }
}
