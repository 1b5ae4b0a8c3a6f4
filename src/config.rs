use crate::options::Options;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay options to preselect in the main menu
    #[serde(default)]
    pub(crate) options: Options,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{GridSize, Speed};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_missing_allowed() {
        let path = Path::new("nonexistent/gridsnake-config.toml");
        let cfg = Config::load(path, true).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_missing_required() {
        let path = Path::new("nonexistent/gridsnake-config.toml");
        assert!(matches!(
            Config::load(path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_empty() {
        let file = NamedTempFile::new().unwrap();
        let cfg = Config::load(file.path(), false).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_options() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            concat!(
                "[options]\n",
                "grid-size = \"large\"\n",
                "speed = \"fast\"\n",
                "wait-for-key = false\n",
            )
        )
        .unwrap();
        let cfg = Config::load(file.path(), false).unwrap();
        assert_eq!(
            cfg.options,
            Options {
                grid_size: GridSize::Large,
                speed: Speed::Fast,
                wait_for_key: false,
            }
        );
    }

    #[test]
    fn load_partial_options() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[options]\nspeed = \"fast\"").unwrap();
        let cfg = Config::load(file.path(), false).unwrap();
        assert_eq!(
            cfg.options,
            Options {
                speed: Speed::Fast,
                ..Options::default()
            }
        );
    }

    #[test]
    fn load_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[options]\ngrid-size = \"enormous\"").unwrap();
        assert!(matches!(
            Config::load(file.path(), false),
            Err(ConfigError::Parse(_))
        ));
    }
}
