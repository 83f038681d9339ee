use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::ComplexDescriptor;
use crate::style::{
    AtomStyle, SphereStyle, StickStyle, SurfaceKind, SurfaceStyle,
};

/// Highlight depiction of the ligand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Ligand", inline)]
#[serde(default)]
pub struct LigandOptions {
    /// Bond cylinder radius in angstroms.
    #[schemars(title = "Stick Radius", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub stick_radius: f32,
    /// Atom sphere radius in angstroms.
    #[schemars(title = "Sphere Radius", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub sphere_radius: f32,
    /// Opacity of the enclosing surface.
    #[schemars(title = "Surface Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub surface_opacity: f32,
    /// Kind of enclosing surface.
    #[schemars(title = "Surface")]
    pub surface_kind: SurfaceKind,
}

impl Default for LigandOptions {
    fn default() -> Self {
        Self {
            stick_radius: 0.35,
            sphere_radius: 0.8,
            surface_opacity: 0.35,
            surface_kind: SurfaceKind::Vdw,
        }
    }
}

impl LigandOptions {
    /// Atomistic sticks-and-spheres rule using the complex's colors.
    #[must_use]
    pub fn style(&self, complex: &ComplexDescriptor) -> AtomStyle {
        AtomStyle {
            cartoon: None,
            stick: Some(StickStyle {
                color: complex.ligand_stick_color.to_owned(),
                radius: self.stick_radius,
            }),
            sphere: Some(SphereStyle {
                color: complex.ligand_surface_color.to_owned(),
                radius: self.sphere_radius,
            }),
        }
    }

    /// Translucent surface appearance using the complex's surface color.
    #[must_use]
    pub fn surface(&self, complex: &ComplexDescriptor) -> SurfaceStyle {
        SurfaceStyle {
            opacity: self.surface_opacity,
            color: complex.ligand_surface_color.to_owned(),
        }
    }
}
