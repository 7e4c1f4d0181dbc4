//! Report rendering.
//!
//! A pure transform from (parsed readings, previous snapshot) to display
//! rows and the updated snapshot. No I/O, color, or clock in here; the CLI
//! layer owns presentation.

use crate::domain::{Snapshot, StationReading, Threshold};

/// One renderable station block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Padded station title.
    pub title: String,
    /// Level recorded by the previous baseline, when one exists and this
    /// run is not itself taking a baseline.
    pub previous_level: Option<String>,
    pub defense_labels: (String, String),
    pub thresholds: Vec<Threshold>,
}

/// Merges readings with the previous snapshot into display rows.
///
/// The returned snapshot always covers the full feed; `group_filter` only
/// narrows which rows are emitted. Stations absent from today's feed keep
/// their previously recorded level. When `taking_baseline` is set the run
/// is overwriting the stored state, so previous-value annotations are
/// suppressed.
pub fn render(
    entries: &[StationReading],
    previous: &Snapshot,
    taking_baseline: bool,
    group_filter: Option<&str>,
) -> (Vec<ReportRow>, Snapshot) {
    let mut updated = previous.clone();
    let mut rows = Vec::new();

    for entry in entries {
        let previous_level = if taking_baseline {
            None
        } else {
            previous.get(&entry.station_key).map(str::to_string)
        };

        updated.set(entry.station_key.clone(), entry.current_level_cm.clone());

        let emitted = group_filter.map_or(true, |group| entry.station_key.starts_with(group));
        if emitted {
            rows.push(ReportRow {
                title: entry.display_title.clone(),
                previous_level,
                defense_labels: entry.defense_labels.clone(),
                thresholds: entry.thresholds.clone(),
            });
        }
    }

    (rows, updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(key: &str, level: &str) -> StationReading {
        let (river, name) = key.split_once(" - ").unwrap();
        StationReading {
            station_key: key.to_string(),
            display_title: format!("{key}  "),
            group_prefix: river.to_string(),
            thresholds: vec![
                Threshold {
                    label: "Vodostaj".into(),
                    date: "04.08.".into(),
                    level: level.into(),
                };
                5
            ],
            defense_labels: ("redovna".into(), "vanredna".into()),
            current_level_cm: level.to_string(),
        }
    }

    fn entries() -> Vec<StationReading> {
        vec![
            reading("DUNAV - A", "100"),
            reading("DUNAV - B", "200"),
            reading("TISA - C", "300"),
        ]
    }

    #[test]
    fn test_group_filter_narrows_rows_not_snapshot() {
        let (rows, updated) = render(&entries(), &Snapshot::new(), false, Some("DUNAV"));

        assert_eq!(rows.len(), 2);
        assert_eq!(updated.len(), 3);
        assert_eq!(updated.get("TISA - C"), Some("300"));
    }

    #[test]
    fn test_no_filter_emits_all_rows() {
        let (rows, updated) = render(&entries(), &Snapshot::new(), false, None);

        assert_eq!(rows.len(), 3);
        assert_eq!(updated.len(), 3);
    }

    #[test]
    fn test_previous_level_annotation() {
        let mut previous = Snapshot::new();
        previous.set("DUNAV - A".into(), "95".into());

        let (rows, _) = render(&entries(), &previous, false, Some("DUNAV"));

        assert_eq!(rows[0].previous_level.as_deref(), Some("95"));
        assert_eq!(rows[1].previous_level, None);
    }

    #[test]
    fn test_baseline_run_suppresses_annotation() {
        let mut previous = Snapshot::new();
        previous.set("DUNAV - A".into(), "95".into());

        let (rows, updated) = render(&entries(), &previous, true, Some("DUNAV"));

        assert_eq!(rows[0].previous_level, None);
        assert_eq!(updated.get("DUNAV - A"), Some("100"));
    }

    #[test]
    fn test_station_absent_from_feed_keeps_old_level() {
        let mut previous = Snapshot::new();
        previous.set("SAVA - Z".into(), "42".into());

        let (_, updated) = render(&entries(), &previous, false, None);

        assert_eq!(updated.get("SAVA - Z"), Some("42"));
        assert_eq!(updated.len(), 4);
    }

    #[test]
    fn test_feed_order_is_preserved() {
        let (rows, _) = render(&entries(), &Snapshot::new(), false, None);

        let titles: Vec<&str> = rows.iter().map(|r| r.title.trim_end()).collect();
        assert_eq!(titles, vec!["DUNAV - A", "DUNAV - B", "TISA - C"]);
    }
}
