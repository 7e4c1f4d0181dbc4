//! Configuration for the vodostaj CLI.
//!
//! Configuration is read from `~/.config/vodostaj/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is
//! created. Missing keys fall back to their defaults.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde::Deserialize;

/// Main configuration struct, constructed once at startup and passed into
/// the pipeline; nothing reads process-wide state after this point.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Atom feed with the current hydrological bulletin.
    pub feed_url: String,
    /// Base URL the station chart images are published under.
    pub chart_base_url: String,
    /// River group shown when `--all` is not given.
    pub default_group: String,
    /// Overrides the platform data directory for state and history.
    pub data_dir: Option<PathBuf>,
    /// Station name to numeric report id, for `--charts`.
    pub stations: BTreeMap<String, u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: "http://www.hidmet.gov.rs/latin/prognoza/prognoza_voda.xml".into(),
            chart_base_url: "http://www.hidmet.gov.rs/podaci/izvestajne/".into(),
            default_group: "DUNAV".into(),
            data_dir: None,
            stations: default_stations(),
        }
    }
}

fn default_stations() -> BTreeMap<String, u32> {
    [
        ("BEZDAN", 42010),
        ("APATIN", 42015),
        ("BOGOJEVO", 42020),
        ("BACKA_PALANKA", 42030),
        ("NOVI_SAD", 42035),
        ("ZEMUN", 42045),
        ("PANCEVO", 42050),
        ("NOVI_KNEZEVAC", 44010),
        ("SENTA", 44020),
        ("TITEL", 44040),
        ("SREMSKA_MITROVICA", 45090),
        ("SABAC", 45094),
        ("BEOGRAD", 45099),
        ("VARVARIN", 47010),
        ("CUPRIJA", 47030),
        ("BAGRDAN", 47040),
        ("LJUBICEVSKI_MOST", 47090),
        ("ALEKSINAC", 47570),
        ("JASIKA", 47195),
    ]
    .into_iter()
    .map(|(name, id)| (name.to_string(), id))
    .collect()
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with
    /// comments. If it exists but is invalid, returns an error.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/vodostaj/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("vodostaj").join("config.toml"))
    }

    fn create_default_config(path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# Vodostaj configuration
#
# feed_url        Atom feed with the current hydrological bulletin
# chart_base_url  base URL the station chart images are published under
# default_group   river group shown when --all is not given
# data_dir        overrides the platform data directory (state + history);
#                 uncomment to relocate

feed_url = "http://www.hidmet.gov.rs/latin/prognoza/prognoza_voda.xml"
chart_base_url = "http://www.hidmet.gov.rs/podaci/izvestajne/"
default_group = "DUNAV"
# data_dir = "/var/lib/vodostaj"

# Station report ids for --charts
[stations]
ALEKSINAC = 47570
APATIN = 42015
BACKA_PALANKA = 42030
BAGRDAN = 47040
BEOGRAD = 45099
BEZDAN = 42010
BOGOJEVO = 42020
CUPRIJA = 47030
JASIKA = 47195
LJUBICEVSKI_MOST = 47090
NOVI_KNEZEVAC = 44010
NOVI_SAD = 42035
PANCEVO = 42050
SABAC = 45094
SENTA = 44020
SREMSKA_MITROVICA = 45090
TITEL = 44040
VARVARIN = 47010
ZEMUN = 42045
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.default_group, "DUNAV");
        assert_eq!(config.stations.len(), 19);
        assert_eq!(config.stations.get("NOVI_SAD"), Some(&42035));
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_partial_config() {
        let content = r#"
default_group = "TISA"
"#;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.default_group, "TISA");
        // untouched keys keep their defaults
        assert_eq!(config.stations.len(), 19);
        assert!(config.feed_url.contains("prognoza_voda.xml"));
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");

        assert_eq!(config.default_group, "DUNAV");
        assert_eq!(config.stations.get("BEZDAN"), Some(&42010));
    }
}
