//! Scheduler configuration, read from a JSON file. Every field has a default so
//! a partial or missing file is fine, as long as the merged result validates:
//! a shortened interval table needs a mastery threshold it can reach.

use crate::error::{Result, SrsError};
use crate::models::IntervalTable;
use crate::models::interval_table::DEFAULT_INTERVAL_HOURS;
use crate::models::progress::DEFAULT_MASTERY_THRESHOLD;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SrsConfig {
    #[serde(default = "default_interval_hours")]
    pub interval_hours: Vec<u32>,
    #[serde(default = "default_mastery_threshold")]
    pub mastery_threshold: u8,
    #[serde(default = "default_new_per_day")]
    pub new_per_day: usize,
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

fn default_interval_hours() -> Vec<u32> {
    DEFAULT_INTERVAL_HOURS.to_vec()
}

fn default_mastery_threshold() -> u8 {
    DEFAULT_MASTERY_THRESHOLD
}

fn default_new_per_day() -> usize {
    10
}

fn default_database_path() -> String {
    "srs.sqlite3".to_string()
}

impl Default for SrsConfig {
    fn default() -> Self {
        Self {
            interval_hours: default_interval_hours(),
            mastery_threshold: default_mastery_threshold(),
            new_per_day: default_new_per_day(),
            database_path: default_database_path(),
        }
    }
}

impl SrsConfig {
    pub fn interval_table(&self) -> Result<IntervalTable> {
        IntervalTable::from_hours(&self.interval_hours)
    }

    /// Checks the interval table and that the mastery threshold is a reachable level.
    pub fn validate(&self) -> Result<()> {
        let table = self.interval_table()?;
        if self.mastery_threshold > table.max_level() {
            return Err(SrsError::InvalidConfig(format!(
                "mastery threshold {} is above the highest level {}",
                self.mastery_threshold,
                table.max_level()
            )));
        }
        Ok(())
    }
}

/// Loads and validates the config at `path`. A missing file gives the defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SrsConfig> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return Ok(SrsConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: SrsConfig = serde_json::from_str(&content)?;
    config.validate()?;

    info!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = load_config(dir.path().join("missing.json")).unwrap();

        assert_eq!(config, SrsConfig::default());
        assert_eq!(config.interval_table().unwrap().max_level(), 8);
        assert_eq!(config.mastery_threshold, 4);
        assert_eq!(config.new_per_day, 10);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("srs.json");
        fs::write(
            &path,
            r#"{ "newPerDay": 20, "intervalHours": [1, 24, 72], "masteryThreshold": 2 }"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.new_per_day, 20);
        assert_eq!(config.mastery_threshold, 2);
        assert_eq!(config.interval_table().unwrap().max_level(), 2);
        assert_eq!(config.database_path, "srs.sqlite3");
    }

    #[test]
    fn test_partial_file_keeps_default_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("srs.json");
        fs::write(&path, r#"{ "databasePath": "n5.sqlite3" }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.database_path, "n5.sqlite3");
        assert_eq!(config.interval_hours, DEFAULT_INTERVAL_HOURS.to_vec());
        assert_eq!(config.mastery_threshold, 4);
    }

    #[test]
    fn test_threshold_above_ceiling_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("srs.json");
        fs::write(&path, r#"{ "intervalHours": [1, 24], "masteryThreshold": 4 }"#).unwrap();

        assert!(matches!(load_config(&path), Err(SrsError::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("srs.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_config(&path), Err(SrsError::Json(_))));
    }
}
