use super::{RenderEngine, RenderSurface};
use crate::catalog::ComplexDescriptor;
use crate::error::RenderError;
use crate::options::Options;
use crate::selection::Selector;

/// Builds the binder/target scene: simplified backdrop, atomistic ligand,
/// translucent ligand surface, camera framed on the ligand.
#[derive(Debug, Clone, Default)]
pub struct RenderAdapter {
    options: Options,
}

impl RenderAdapter {
    /// Create an adapter that styles scenes with `options`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Options scenes are built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Clear `container`, build a fresh surface for `text` and return it.
    ///
    /// The caller owns the returned surface and must dispose it before the
    /// next `present` on the same container. On error no surface survives:
    /// a partially built one is disposed here.
    pub fn present<E: RenderEngine>(
        &self,
        engine: &mut E,
        container: &E::Container,
        text: &str,
        complex: &ComplexDescriptor,
    ) -> Result<E::Surface, RenderError> {
        if text.trim().is_empty() {
            return Err(RenderError::EmptyStructure);
        }

        engine.clear_container(container)?;
        let mut surface =
            engine.create_surface(container, &self.options.viewer.config())?;

        match self.populate(&mut surface, text, complex) {
            Ok(()) => {
                log::debug!("scene ready for {}", complex.id);
                Ok(surface)
            }
            Err(e) => {
                if let Err(dispose_err) = surface.dispose() {
                    log::warn!(
                        "failed to dispose partial scene for {}: {dispose_err}",
                        complex.id
                    );
                }
                Err(e)
            }
        }
    }

    fn populate<S: RenderSurface>(
        &self,
        surface: &mut S,
        text: &str,
        complex: &ComplexDescriptor,
    ) -> Result<(), RenderError> {
        let ligand = Selector::Matching(&complex.ligand_selection);
        let backdrop = Selector::Excluding(&complex.ligand_selection);
        let opts = &self.options;

        surface.add_model(text, opts.source.format)?;
        surface.set_style(backdrop, &opts.backdrop.style())?;
        surface.set_style(ligand, &opts.ligand.style(complex))?;
        surface.add_surface(
            opts.ligand.surface_kind,
            &opts.ligand.surface(complex),
            ligand,
        )?;
        surface.zoom_to(ligand)?;
        surface.render()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::catalog::{default_complex, find};
    use crate::render::{FailPoint, RecordingEngine, SceneCommand};
    use crate::style::SurfaceKind;

    const PDB: &str = "HETATM 1  C1  STI A 201      1.000   2.000   3.000\n";

    fn ops(engine: &RecordingEngine) -> Vec<&'static str> {
        engine.log().commands().iter().map(SceneCommand::op).collect()
    }

    #[test]
    fn builds_scene_in_order() {
        let mut engine = RecordingEngine::new();
        let adapter = RenderAdapter::default();
        let _surface = adapter
            .present(&mut engine, &"viewer".to_owned(), PDB, default_complex())
            .unwrap();

        assert_eq!(
            ops(&engine),
            vec![
                "clear_container",
                "create_surface",
                "add_model",
                "set_style",
                "set_style",
                "add_surface",
                "zoom_to",
                "render",
            ]
        );
        assert_eq!(engine.log().live_surfaces(), 1);
    }

    #[test]
    fn backdrop_excludes_ligand_and_ligand_uses_complex_colors() {
        let mut engine = RecordingEngine::new();
        let complex = find("1M17").unwrap();
        let _surface = RenderAdapter::default()
            .present(&mut engine, &"viewer".to_owned(), PDB, complex)
            .unwrap();

        let commands = engine.log().commands();
        let styles: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                SceneCommand::SetStyle {
                    selection, style, ..
                } => Some((selection.clone(), style.clone())),
                _ => None,
            })
            .collect();

        assert_eq!(styles[0].0, json!({ "not": { "resn": "AQ4" } }));
        assert_eq!(
            styles[0].1.cartoon.as_ref().map(|c| c.color.as_str()),
            Some("#1f2937")
        );
        assert_eq!(styles[1].0, json!({ "resn": "AQ4" }));
        assert_eq!(styles[1].1.stick_color(), Some("#22d3ee"));

        assert!(commands.iter().any(|c| matches!(
            c,
            SceneCommand::AddSurface { kind: SurfaceKind::Vdw, style, selection, .. }
                if style.color == "#a5f3fc"
                    && style.opacity == 0.35
                    && *selection == json!({ "resn": "AQ4" })
        )));
        assert!(commands.iter().any(|c| matches!(
            c,
            SceneCommand::ZoomTo { selection, .. }
                if *selection == json!({ "resn": "AQ4" })
        )));
    }

    #[test]
    fn empty_text_touches_nothing() {
        let mut engine = RecordingEngine::new();
        let err = RenderAdapter::default()
            .present(&mut engine, &"viewer".to_owned(), "  \n", default_complex())
            .unwrap_err();

        assert_eq!(err, RenderError::EmptyStructure);
        assert!(engine.log().commands().is_empty());
    }

    #[test]
    fn partial_scene_is_disposed_on_failure() {
        let mut engine = RecordingEngine::new().fail_at(FailPoint::AddSurface);
        let err = RenderAdapter::default()
            .present(&mut engine, &"viewer".to_owned(), PDB, default_complex())
            .unwrap_err();

        assert!(matches!(err, RenderError::Engine { step: "addSurface", .. }));
        assert_eq!(engine.log().created_surfaces(), 1);
        assert_eq!(engine.log().live_surfaces(), 0);
        assert_eq!(ops(&engine).last(), Some(&"dispose"));
    }

    #[test]
    fn failure_after_surface_generation_still_disposes() {
        let cases = [(FailPoint::ZoomTo, "zoomTo"), (FailPoint::Render, "render")];
        for (point, step) in cases {
            let mut engine = RecordingEngine::new().fail_at(point);
            let err = RenderAdapter::default()
                .present(&mut engine, &"viewer".to_owned(), PDB, default_complex())
                .unwrap_err();

            assert_eq!(
                err,
                RenderError::Engine {
                    step,
                    message: "injected failure".to_owned(),
                }
            );
            assert_eq!(engine.log().live_surfaces(), 0);
            assert_eq!(ops(&engine).last(), Some(&"dispose"));
        }
    }
}
