//! Resource build orchestrator responsible for generating and writing the manifest.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::ResourceConfig;
use crate::manifest::{collect_asset_paths, render_manifest};
use crate::models::ResourceManifest;

/// High-level helper for generating the resource manifest of a project.
#[derive(Debug, Clone)]
pub struct ResourceBuilder {
  root: PathBuf,
  config: ResourceConfig,
}

impl ResourceBuilder {
  /// Create a builder resolving configured paths against `root`.
  pub fn new(root: impl Into<PathBuf>, config: ResourceConfig) -> Self {
    Self {
      root: root.into(),
      config,
    }
  }

  /// Walk the input directory and render the manifest document.
  ///
  /// A missing input directory is not an error; the manifest then holds only the icon
  /// entries.
  pub fn generate(&self) -> ResourceManifest {
    let input_dir = self.config.input_path(&self.root);
    let output_path = self.config.output_path(&self.root);

    if !input_dir.is_dir() {
      tracing::warn!(
        input = %input_dir.display(),
        "input directory not found, manifest will only list the icon entries"
      );
    }

    let skip = output_path.exists().then_some(output_path.as_path());
    let mut asset_paths =
      collect_asset_paths(&input_dir, Path::new(&self.config.input_dir), skip);
    if self.config.sort {
      asset_paths.sort();
    }

    let document = render_manifest(&asset_paths);
    tracing::debug!(assets = asset_paths.len(), "rendered resource manifest");

    ResourceManifest {
      asset_paths,
      document,
      output_path,
    }
  }

  /// Write the manifest, replacing any previous content of the output file.
  pub fn write(&self, manifest: &ResourceManifest) -> Result<PathBuf> {
    fs::write(&manifest.output_path, &manifest.document)
      .with_context(|| format!("failed to write {}", manifest.output_path.display()))?;

    tracing::info!(
      output = %manifest.output_path.display(),
      entries = manifest.entry_count(),
      "wrote resource manifest"
    );
    Ok(manifest.output_path.clone())
  }

  /// Returns `true` when the output file already holds exactly this manifest.
  pub fn check(&self, manifest: &ResourceManifest) -> Result<bool> {
    match fs::read_to_string(&manifest.output_path) {
      Ok(current) => Ok(current == manifest.document),
      Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
      Err(err) => {
        Err(err).with_context(|| format!("failed to read {}", manifest.output_path.display()))
      }
    }
  }
}
