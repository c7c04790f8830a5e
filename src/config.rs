//! wagmi configuration.
//!
//! Loaded from `~/.wagmi/config.toml`. Every key is optional and a missing
//! file means defaults.

use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;

use wagmi::query::SortMode;

/// wagmi configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Where application data lives. Defaults to `~/.wagmi/data/`.
    pub data_dir: Option<PathBuf>,

    /// Sort used by `wagmi list` when `--sort` is not given.
    #[serde(default)]
    pub default_sort: SortMode,
}

impl Config {
    /// Load config from `~/.wagmi/config.toml`, or defaults if there is none.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`. A missing file yields defaults; an unreadable
    /// or invalid one is an error naming the path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.wagmi/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".wagmi").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.default_sort, SortMode::Status);
    }

    #[test]
    fn reads_kebab_case_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "data-dir = \"/tmp/wagmi-data\"\ndefault-sort = \"newest\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/wagmi-data")));
        assert_eq!(config.default_sort, SortMode::Newest);
    }

    #[test]
    fn empty_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn invalid_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default-sort = \"sideways\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();

        assert!(err.contains("invalid config at"));
        assert!(err.contains("config.toml"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default-identity = \"someone\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
