//! Project configuration describing where assets are read from and where the manifest goes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File name searched for in the working directory by [`ResourceConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "qrc.config.json";

/// Directory walked for assets when nothing else is configured.
pub const DEFAULT_INPUT_DIR: &str = "html";

/// Manifest written when nothing else is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "resources.qrc";

/// Input and output locations for a manifest run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
  /// Directory, relative to the project root, whose files are listed in the manifest.
  pub input_dir: String,
  /// Manifest path relative to the project root.
  pub output_file: String,
  /// Sort discovered paths instead of keeping directory traversal order.
  pub sort: bool,
}

impl Default for ResourceConfig {
  fn default() -> Self {
    Self {
      input_dir: DEFAULT_INPUT_DIR.into(),
      output_file: DEFAULT_OUTPUT_FILE.into(),
      sort: true,
    }
  }
}

/// Errors that can occur while loading the configuration file.
#[derive(Debug)]
pub enum ConfigError {
  /// Failed to read the configuration file from disk.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse the JSON configuration.
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
}

impl ResourceConfig {
  /// Load `qrc.config.json` from `root`, falling back to defaults when it does not exist.
  pub fn discover(root: &Path) -> Result<Self, ConfigError> {
    let candidate = root.join(DEFAULT_CONFIG_FILE);
    match Self::from_path(&candidate) {
      Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
        Ok(Self::default())
      }
      other => other,
    }
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
    let content = fs::read_to_string(path).map_err(|err| ConfigError::Io {
      path: path.to_path_buf(),
      source: err,
    })?;
    serde_json::from_str(&content).map_err(|err| ConfigError::Parse {
      path: path.to_path_buf(),
      source: err,
    })
  }

  /// Location of the asset directory under `root`.
  pub fn input_path(&self, root: &Path) -> PathBuf {
    root.join(&self.input_dir)
  }

  /// Location of the manifest under `root`.
  pub fn output_path(&self, root: &Path) -> PathBuf {
    root.join(&self.output_file)
  }
}

impl std::fmt::Display for ConfigError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::Parse { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
    }
  }
}

impl std::error::Error for ConfigError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Parse { source, .. } => Some(source),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn defaults_read_html_and_write_resources_qrc() {
    let config = ResourceConfig::default();
    assert_eq!(config.input_dir, "html");
    assert_eq!(config.output_file, "resources.qrc");
    assert!(config.sort);
  }

  #[test]
  fn discover_returns_default_for_missing_file() {
    let temp = tempdir().expect("failed to create temp dir");

    let config =
      ResourceConfig::discover(temp.path()).expect("missing files should not produce an error");

    assert_eq!(config, ResourceConfig::default());
  }

  #[test]
  fn discover_reads_partial_configuration() {
    let temp = tempdir().expect("failed to create temp dir");
    fs::write(
      temp.path().join(DEFAULT_CONFIG_FILE),
      r#"{"input_dir": "web", "sort": false}"#,
    )
    .expect("failed to write config file");

    let config = ResourceConfig::discover(temp.path()).expect("configuration should load");

    assert_eq!(config.input_dir, "web");
    assert_eq!(config.output_file, DEFAULT_OUTPUT_FILE);
    assert!(!config.sort);
  }

  #[test]
  fn malformed_configuration_is_reported() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = temp.path().join(DEFAULT_CONFIG_FILE);
    fs::write(&path, "{ not json").expect("failed to write config file");

    let err = ResourceConfig::discover(temp.path()).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("qrc.config.json"));
  }

  #[test]
  fn resolves_paths_against_root() {
    let config = ResourceConfig::default();
    let root = Path::new("project");
    assert_eq!(config.input_path(root), root.join("html"));
    assert_eq!(config.output_path(root), root.join("resources.qrc"));
  }
}
