//! Data structures produced while generating a resource manifest.

use std::path::PathBuf;

use crate::manifest::escape_xml_text;

/// A single `<file>` element of the resource collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
  /// Runtime lookup name. Walked assets have none, so they resolve by their path.
  pub alias: Option<String>,
  /// Path of the file relative to the `.qrc` location.
  pub path: String,
}

impl ResourceEntry {
  /// Entry resolved at runtime by its literal path.
  pub fn file(path: impl Into<String>) -> Self {
    Self {
      alias: None,
      path: path.into(),
    }
  }

  /// Entry looked up at runtime under `alias`.
  pub fn aliased(alias: impl Into<String>, path: impl Into<String>) -> Self {
    Self {
      alias: Some(alias.into()),
      path: path.into(),
    }
  }

  /// Render the entry as a `<file>` element with escaped text and attribute values.
  pub fn render(&self) -> String {
    let path = escape_xml_text(&self.path);
    match &self.alias {
      Some(alias) => format!(
        "<file alias=\"{}\">{}</file>",
        escape_xml_text(alias),
        path
      ),
      None => format!("<file>{path}</file>"),
    }
  }
}

/// Generated manifest ready to be written to disk.
#[derive(Debug, Clone)]
pub struct ResourceManifest {
  /// Asset paths discovered under the input directory, in emission order.
  pub asset_paths: Vec<String>,
  /// Complete XML document.
  pub document: String,
  /// Destination of the manifest.
  pub output_path: PathBuf,
}

impl ResourceManifest {
  /// Total number of `<file>` elements, including the fixed icon entries.
  pub fn entry_count(&self) -> usize {
    self.asset_paths.len() + crate::manifest::fixed_entries().len()
  }
}
