#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![allow(clippy::module_inception)]

pub mod builder;
pub mod config;
pub mod manifest;
pub mod models;

pub use builder::ResourceBuilder;
pub use config::{ConfigError, ResourceConfig};
pub use models::{ResourceEntry, ResourceManifest};
