//! Declarative style values handed to the rendering engine.
//!
//! These mirror the engine's own JSON shapes so they can be serialized
//! straight into engine calls.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Construction parameters for a new rendering surface.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewerConfig {
    /// Canvas clear color.
    pub background_color: String,
    /// Whether to request an antialiased context.
    pub antialias: bool,
}

/// Simplified secondary-structure ribbon.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartoonStyle {
    /// Uniform ribbon color.
    pub color: String,
    /// Ribbon opacity in `[0, 1]`.
    pub opacity: f32,
}

/// Bonds drawn as cylinders.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StickStyle {
    /// Cylinder color.
    pub color: String,
    /// Cylinder radius in Angstroms.
    pub radius: f32,
}

/// Atoms drawn as spheres.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SphereStyle {
    /// Sphere color.
    pub color: String,
    /// Sphere radius in Angstroms.
    pub radius: f32,
}

/// A per-atom style rule. Absent representations are not drawn.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AtomStyle {
    /// Ribbon representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cartoon: Option<CartoonStyle>,
    /// Bond representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stick: Option<StickStyle>,
    /// Atom representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sphere: Option<SphereStyle>,
}

impl AtomStyle {
    /// Color of the stick representation, if any.
    #[must_use]
    pub fn stick_color(&self) -> Option<&str> {
        self.stick.as_ref().map(|s| s.color.as_str())
    }
}

/// Appearance of a molecular surface.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SurfaceStyle {
    /// Surface opacity in `[0, 1]`.
    pub opacity: f32,
    /// Surface color.
    pub color: String,
}

/// Kind of enclosing surface the engine should compute.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    /// Van der Waals surface.
    #[default]
    Vdw,
    /// Solvent-accessible surface.
    Sas,
    /// Solvent-excluded surface.
    Ses,
    /// Molecular surface.
    Ms,
}

impl SurfaceKind {
    /// Key of this kind in the engine's `SurfaceType` table.
    #[must_use]
    pub fn engine_key(self) -> &'static str {
        match self {
            Self::Vdw => "VDW",
            Self::Sas => "SAS",
            Self::Ses => "SES",
            Self::Ms => "MS",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_representations_are_omitted() {
        let style = AtomStyle {
            stick: Some(StickStyle {
                color: "#f97316".to_owned(),
                radius: 0.35,
            }),
            ..AtomStyle::default()
        };
        let value = serde_json::to_value(&style).unwrap();
        assert_eq!(value["stick"]["color"], json!("#f97316"));
        assert!(value.get("cartoon").is_none());
        assert!(value.get("sphere").is_none());
        assert_eq!(style.stick_color(), Some("#f97316"));
    }

    #[test]
    fn viewer_config_uses_engine_keys() {
        let config = ViewerConfig {
            background_color: "#050505".to_owned(),
            antialias: true,
        };
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({ "backgroundColor": "#050505", "antialias": true })
        );
    }

    #[test]
    fn surface_kind_engine_keys() {
        assert_eq!(SurfaceKind::default().engine_key(), "VDW");
        assert_eq!(SurfaceKind::Ses.engine_key(), "SES");
    }
}
