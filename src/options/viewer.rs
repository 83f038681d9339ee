use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::style::ViewerConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Viewer", inline)]
#[serde(default)]
/// Rendering surface construction parameters.
pub struct ViewerOptions {
    /// Canvas clear color.
    #[schemars(title = "Background")]
    pub background_color: String,
    /// Request an antialiased drawing context.
    #[schemars(title = "Antialias")]
    pub antialias: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            background_color: "#050505".to_owned(),
            antialias: true,
        }
    }
}

impl ViewerOptions {
    /// Engine configuration object for a new surface.
    #[must_use]
    pub fn config(&self) -> ViewerConfig {
        ViewerConfig {
            background_color: self.background_color.clone(),
            antialias: self.antialias,
        }
    }
}
