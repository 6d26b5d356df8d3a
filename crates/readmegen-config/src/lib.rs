//! Persistent CLI settings.
//!
//! A single key, `source_root`, lives in `~/.config/readmegen/config.toml`.
//! It names the directory scanned for `readme.toml` records when `convert`
//! runs without an explicit input. Tilde and environment variables in the
//! stored path are expanded at load time.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub source_root: PathBuf,
}

impl Config {
    pub fn new(source_root: PathBuf) -> Self {
        Self { source_root }
    }

    /// Loads the config file at the default location. A missing file is
    /// `Ok(None)`, not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(config.expanded()))
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_path(Self::config_path())
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `~/.config/readmegen/config.toml`, with the tilde resolved.
    pub fn config_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde("~/.config/readmegen").as_ref()).join("config.toml")
    }

    // Expansion failures (e.g. an unset variable) keep the raw path; the
    // scan will then fail with a path the user can recognize.
    fn expanded(mut self) -> Self {
        let expanded = {
            let raw = self.source_root.to_string_lossy();
            shellexpand::full(raw.as_ref())
                .map(|s| PathBuf::from(s.as_ref()))
                .ok()
        };
        if let Some(root) = expanded {
            self.source_root = root;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn config_path_is_under_dot_config() {
        let path = Config::config_path();
        let s = path.to_string_lossy();
        assert!(!s.starts_with('~'));
        assert!(s.ends_with(".config/readmegen/config.toml"));
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from_path(dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.toml");
        fs::write(&file, "source_root = 3\n").unwrap();

        let err = Config::load_from_path(&file).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        // Nested path: save creates missing parent directories.
        let file = dir.path().join("readmegen/config.toml");
        let config = Config::new(PathBuf::from("/srv/courses/final"));

        config.save_to_path(&file).unwrap();
        let loaded = Config::load_from_path(&file).unwrap().unwrap();
        assert_eq!(loaded.source_root, config.source_root);
    }

    #[test]
    fn tilde_in_source_root_is_expanded() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.toml");
        fs::write(&file, "source_root = \"~/courses/final\"\n").unwrap();

        let loaded = Config::load_from_path(&file).unwrap().unwrap();
        let s = loaded.source_root.to_string_lossy();
        assert!(!s.starts_with('~'));
        assert!(s.ends_with("courses/final"));
    }

    #[test]
    fn env_var_in_source_root_is_expanded() {
        unsafe {
            env::set_var("READMEGEN_TEST_ROOT", "/data/courses");
        }
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.toml");
        fs::write(&file, "source_root = \"$READMEGEN_TEST_ROOT/final\"\n").unwrap();

        let loaded = Config::load_from_path(&file).unwrap().unwrap();
        assert_eq!(loaded.source_root, PathBuf::from("/data/courses/final"));
        unsafe {
            env::remove_var("READMEGEN_TEST_ROOT");
        }
    }
}
