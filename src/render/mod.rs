//! Scene construction on top of an external rendering engine.
//!
//! The engine is reached through two traits: [`RenderEngine`] creates
//! surfaces bound to a drawing container, [`RenderSurface`] is one live
//! scene that must be disposed explicitly. [`RenderAdapter`] drives them to
//! build the binder/target scene for a complex.

mod adapter;
/// Headless engine that records scene commands.
pub mod recording;
#[cfg(feature = "web")]
mod threedmol;

use std::future::Future;

pub use adapter::RenderAdapter;
pub use recording::{FailPoint, RecordingEngine, SceneCommand, SceneLog};
#[cfg(feature = "web")]
pub use threedmol::{ThreeDmolEngine, ThreeDmolSurface};

use crate::error::RenderError;
use crate::selection::Selector;
use crate::source::StructureFormat;
use crate::style::{AtomStyle, SurfaceKind, SurfaceStyle, ViewerConfig};

/// Factory side of a rendering engine.
pub trait RenderEngine {
    /// Drawing target surfaces attach to (a DOM element in the browser).
    type Container;
    /// Live scene handle produced by [`create_surface`](Self::create_surface).
    type Surface: RenderSurface;
    /// Future returned by [`prepare`](Self::prepare).
    type Prepare: Future<Output = Result<(), RenderError>> + 'static;

    /// Make sure the engine module is loaded. The returned future owns
    /// everything it needs so callers can await it without borrowing the
    /// engine.
    fn prepare(&self) -> Self::Prepare;

    /// Remove any existing content from `container`.
    fn clear_container(
        &mut self,
        container: &Self::Container,
    ) -> Result<(), RenderError>;

    /// Create a new surface bound to `container`.
    fn create_surface(
        &mut self,
        container: &Self::Container,
        config: &ViewerConfig,
    ) -> Result<Self::Surface, RenderError>;
}

/// One live scene.
pub trait RenderSurface {
    /// Load structure text in the given format.
    fn add_model(
        &mut self,
        text: &str,
        format: StructureFormat,
    ) -> Result<(), RenderError>;

    /// Apply a style rule to the selected atoms.
    fn set_style(
        &mut self,
        selector: Selector<'_>,
        style: &AtomStyle,
    ) -> Result<(), RenderError>;

    /// Compute and attach an enclosing surface for the selected atoms.
    fn add_surface(
        &mut self,
        kind: SurfaceKind,
        style: &SurfaceStyle,
        selector: Selector<'_>,
    ) -> Result<(), RenderError>;

    /// Frame the camera on the selected atoms.
    fn zoom_to(&mut self, selector: Selector<'_>) -> Result<(), RenderError>;

    /// Draw one frame.
    fn render(&mut self) -> Result<(), RenderError>;

    /// Release the surface's resources. The surface must not be used
    /// afterwards.
    fn dispose(&mut self) -> Result<(), RenderError>;
}

/// Best-effort text for a thrown JS value.
#[cfg(feature = "web")]
pub(crate) fn js_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
