use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::style::{AtomStyle, CartoonStyle};

/// The backdrop is always drawn fully opaque.
const OPAQUE: f32 = 1.0;

/// Simplified depiction of everything that is not the ligand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Backdrop", inline)]
#[serde(default)]
pub struct BackdropOptions {
    /// Uniform low-saturation ribbon color.
    #[schemars(title = "Color")]
    pub color: String,
}

impl Default for BackdropOptions {
    fn default() -> Self {
        Self {
            color: "#1f2937".to_owned(),
        }
    }
}

impl BackdropOptions {
    /// Cartoon-only style rule for backdrop atoms.
    #[must_use]
    pub fn style(&self) -> AtomStyle {
        AtomStyle {
            cartoon: Some(CartoonStyle {
                color: self.color.clone(),
                opacity: OPAQUE,
            }),
            ..AtomStyle::default()
        }
    }
}
