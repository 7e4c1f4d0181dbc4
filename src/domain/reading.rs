/// One threshold line from a station bulletin: a label, a date or tag, and
/// a water level in centimeters. Levels stay as decimal strings; they are
/// only ever displayed, never computed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Threshold {
    pub label: String,
    pub date: String,
    pub level: String,
}

/// A single station's bulletin entry in structured form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationReading {
    /// `"<RIVER> - <STATION>"`, trimmed; unique display and lookup key.
    pub station_key: String,
    /// Same as [`station_key`](Self::station_key) with the station name
    /// right-padded so report columns line up.
    pub display_title: String,
    /// The river part of the key, used for group filtering.
    pub group_prefix: String,
    /// Exactly five entries after a successful parse.
    pub thresholds: Vec<Threshold>,
    /// The two active defense-level names, lower-cased, annotations stripped.
    pub defense_labels: (String, String),
    /// The live reading, taken from the final threshold slot.
    pub current_level_cm: String,
}
