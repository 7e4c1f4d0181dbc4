use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Last-observed current level per station, keyed by station key.
///
/// Backed by a `BTreeMap` so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    levels: BTreeMap<String, String>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, station_key: &str) -> Option<&str> {
        self.levels.get(station_key).map(String::as_str)
    }

    pub fn set(&mut self, station_key: String, level_cm: String) {
        self.levels.insert(station_key, level_cm);
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.levels.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut snapshot = Snapshot::new();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.get("DUNAV - NOVI SAD"), None);

        snapshot.set("DUNAV - NOVI SAD".into(), "123".into());
        assert_eq!(snapshot.get("DUNAV - NOVI SAD"), Some("123"));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_set_overwrites() {
        let mut snapshot = Snapshot::new();
        snapshot.set("TISA - SENTA".into(), "100".into());
        snapshot.set("TISA - SENTA".into(), "95".into());
        assert_eq!(snapshot.get("TISA - SENTA"), Some("95"));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_iter_is_sorted() {
        let mut snapshot = Snapshot::new();
        snapshot.set("TISA - SENTA".into(), "1".into());
        snapshot.set("DUNAV - APATIN".into(), "2".into());
        let keys: Vec<&str> = snapshot.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["DUNAV - APATIN", "TISA - SENTA"]);
    }
}
