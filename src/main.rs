//! gen-resource - regenerate a Qt resource collection from an asset directory
//!
//! Usage: gen-resource [--input DIR] [--output FILE] [--dry-run | --check]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use qrc_manifest::{ResourceBuilder, ResourceConfig};

/// Regenerate resources.qrc from the files under html/
#[derive(Parser, Debug)]
#[command(name = "gen-resource")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Directory whose files are listed in the manifest [default: html]
  #[arg(short, long)]
  input: Option<String>,

  /// Manifest file to write [default: resources.qrc]
  #[arg(short, long)]
  output: Option<String>,

  /// Configuration file (defaults to qrc.config.json when present)
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Keep directory traversal order instead of sorting paths
  #[arg(long)]
  unsorted: bool,

  /// Print the manifest to stdout without writing it
  #[arg(long, conflicts_with = "check")]
  dry_run: bool,

  /// Exit with status 1 when the manifest on disk is missing or out of date
  #[arg(long)]
  check: bool,

  /// Verbosity level (-v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

/// Result of a run, mapped onto the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
  Written,
  Printed,
  UpToDate,
  Stale,
}

impl Outcome {
  fn exit_status(self) -> u8 {
    match self {
      Outcome::Stale => 1,
      Outcome::Written | Outcome::Printed | Outcome::UpToDate => 0,
    }
  }
}

fn main() -> Result<ExitCode> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let outcome = run(&cli, Path::new("."))?;
  Ok(ExitCode::from(outcome.exit_status()))
}

fn run(cli: &Cli, root: &Path) -> Result<Outcome> {
  let config = resolve_config(cli, root)?;
  let builder = ResourceBuilder::new(root, config);
  let manifest = builder.generate();

  if cli.dry_run {
    println!("{}", manifest.document);
    return Ok(Outcome::Printed);
  }

  if cli.check {
    if builder.check(&manifest)? {
      tracing::info!(output = %manifest.output_path.display(), "resource manifest is up to date");
      return Ok(Outcome::UpToDate);
    }
    eprintln!(
      "{} is out of date, run gen-resource to regenerate it",
      manifest.output_path.display()
    );
    return Ok(Outcome::Stale);
  }

  builder.write(&manifest)?;
  Ok(Outcome::Written)
}

/// Load the configuration file, then apply command line overrides on top of it.
fn resolve_config(cli: &Cli, root: &Path) -> Result<ResourceConfig> {
  let mut config = match &cli.config {
    Some(path) => {
      let path = root.join(path);
      ResourceConfig::from_path(&path)
        .with_context(|| format!("invalid configuration {}", path.display()))?
    }
    None => ResourceConfig::discover(root)?,
  };

  if let Some(input) = &cli.input {
    config.input_dir = input.clone();
  }
  if let Some(output) = &cli.output {
    config.output_file = output.clone();
  }
  if cli.unsorted {
    config.sort = false;
  }
  Ok(config)
}

fn init_tracing(verbose: u8) {
  let default_level = match verbose {
    0 => "warn",
    1 => "info",
    _ => "debug",
  };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("gen-resource").chain(args.iter().copied()))
      .expect("arguments should parse")
  }

  #[test]
  fn no_arguments_use_defaults() -> Result<()> {
    let temp = tempdir()?;

    let config = resolve_config(&parse(&[]), temp.path())?;

    assert_eq!(config, ResourceConfig::default());
    Ok(())
  }

  #[test]
  fn flags_override_discovered_configuration() -> Result<()> {
    let temp = tempdir()?;
    fs::write(
      temp.path().join("qrc.config.json"),
      r#"{"input_dir": "web", "output_file": "web.qrc", "sort": true}"#,
    )?;

    let from_file = resolve_config(&parse(&[]), temp.path())?;
    assert_eq!(from_file.input_dir, "web");
    assert_eq!(from_file.output_file, "web.qrc");
    assert!(from_file.sort);

    let overridden = resolve_config(
      &parse(&["--input", "assets", "--output", "assets.qrc", "--unsorted"]),
      temp.path(),
    )?;
    assert_eq!(overridden.input_dir, "assets");
    assert_eq!(overridden.output_file, "assets.qrc");
    assert!(!overridden.sort);
    Ok(())
  }

  #[test]
  fn explicit_config_file_is_used_and_partially_overridden() -> Result<()> {
    let temp = tempdir()?;
    fs::write(
      temp.path().join("custom.json"),
      r#"{"input_dir": "pages", "output_file": "pages.qrc"}"#,
    )?;

    let config = resolve_config(&parse(&["--config", "custom.json", "-o", "x.qrc"]), temp.path())?;

    assert_eq!(config.input_dir, "pages");
    assert_eq!(config.output_file, "x.qrc");
    Ok(())
  }

  #[test]
  fn missing_explicit_config_file_is_an_error() {
    let temp = tempdir().unwrap();

    let err = resolve_config(&parse(&["--config", "absent.json"]), temp.path()).unwrap_err();

    assert!(err.to_string().contains("absent.json"));
  }

  #[test]
  fn dry_run_conflicts_with_check() {
    let err = Cli::try_parse_from(["gen-resource", "--dry-run", "--check"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
  }

  #[test]
  fn check_reports_stale_then_up_to_date() -> Result<()> {
    let temp = tempdir()?;
    fs::create_dir_all(temp.path().join("html"))?;
    fs::write(temp.path().join("html/index.html"), "")?;

    assert_eq!(run(&parse(&["--check"]), temp.path())?, Outcome::Stale);
    assert!(!temp.path().join("resources.qrc").exists());

    assert_eq!(run(&parse(&[]), temp.path())?, Outcome::Written);
    assert_eq!(run(&parse(&["--check"]), temp.path())?, Outcome::UpToDate);
    Ok(())
  }

  #[test]
  fn dry_run_writes_nothing() -> Result<()> {
    let temp = tempdir()?;

    assert_eq!(run(&parse(&["--dry-run"]), temp.path())?, Outcome::Printed);
    assert!(!temp.path().join("resources.qrc").exists());
    Ok(())
  }

  #[test]
  fn only_stale_manifests_fail_the_process() {
    assert_eq!(Outcome::Stale.exit_status(), 1);
    assert_eq!(Outcome::Written.exit_status(), 0);
    assert_eq!(Outcome::Printed.exit_status(), 0);
    assert_eq!(Outcome::UpToDate.exit_status(), 0);
  }
}
