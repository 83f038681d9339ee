//! Viewer options with TOML preset support.
//!
//! Every tweakable setting (surface construction, backdrop and ligand
//! depiction, structure source) lives here. Options serialize to/from TOML
//! so a preset only needs to name the sections it overrides.

mod backdrop;
mod ligand;
mod source;
mod viewer;

use std::path::Path;

pub use backdrop::BackdropOptions;
pub use ligand::LigandOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use source::SourceOptions;
pub use viewer::ViewerOptions;

use crate::error::LigviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[ligand]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Rendering surface construction.
    pub viewer: ViewerOptions,
    /// Depiction of non-ligand atoms.
    pub backdrop: BackdropOptions,
    /// Depiction of the ligand and its surface.
    pub ligand: LigandOptions,
    /// Structure download settings.
    pub source: SourceOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, LigviewError> {
        toml::from_str(content)
            .map_err(|e| LigviewError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, LigviewError> {
        let content = std::fs::read_to_string(path).map_err(LigviewError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), LigviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LigviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(LigviewError::Io)?;
        }
        std::fs::write(path, content).map_err(LigviewError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
