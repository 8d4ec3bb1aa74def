//! Manifest generation broken into focused submodules for easier testing.

mod rendering;
mod scanning;

pub use rendering::{escape_xml_text, fixed_entries, render_manifest};
pub use scanning::collect_asset_paths;
