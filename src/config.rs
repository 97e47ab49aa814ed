//! User configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TaskBoardError};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub drop: DropConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchBy {
    /// Remove every pending task whose text equals the dropped text.
    #[default]
    Text,
    /// Remove only the dragged instance, keyed by its id.
    Id,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DropConfig {
    #[serde(default)]
    pub match_by: MatchBy,

    /// Ignore drops that carry no `text/plain` payload.
    #[serde(default)]
    pub ignore_empty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taskboard").join("config.toml"))
}

impl Config {
    /// Loads from `path`, or the default location when `None`. A missing file
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
            Some(p) => p,
            None => return Ok(Config::default()),
        };
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| TaskBoardError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| TaskBoardError::ConfigParse { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_deserialize_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.drop.match_by, MatchBy::Text);
        assert!(!config.drop.ignore_empty);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_deserialize_partial_toml() {
        let toml = r#"
            [drop]
            match_by = "id"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.drop.match_by, MatchBy::Id);
        assert!(!config.drop.ignore_empty);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[drop]\nignore_empty = true\n\n[logging]\nlevel = \"debug\"\nfile = \"/tmp/tb.log\""
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.drop.ignore_empty);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/tb.log")));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[drop]\nmatch_by = \"color\"").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, TaskBoardError::ConfigParse { .. }));
    }
}
