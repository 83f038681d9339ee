use crate::render::RenderSurface;

/// Holds at most one live rendering surface.
///
/// Replacing or clearing the slot disposes the previous occupant first;
/// dropping the slot disposes whatever it still holds.
#[derive(Debug)]
pub struct SurfaceSlot<S: RenderSurface> {
    current: Option<S>,
}

impl<S: RenderSurface> Default for SurfaceSlot<S> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<S: RenderSurface> SurfaceSlot<S> {
    /// Empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a surface is live.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }

    /// The live surface, if any.
    #[must_use]
    pub fn get(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// Store `surface`, disposing any previous occupant first.
    pub fn replace(&mut self, surface: S) {
        let _ = self.dispose();
        self.current = Some(surface);
    }

    /// Dispose the live surface, if any. Returns whether one was disposed.
    ///
    /// Disposal errors are logged; the surface is dropped either way.
    pub fn dispose(&mut self) -> bool {
        let Some(mut surface) = self.current.take() else {
            return false;
        };
        if let Err(e) = surface.dispose() {
            log::warn!("failed to dispose rendering surface: {e}");
        }
        true
    }
}

impl<S: RenderSurface> Drop for SurfaceSlot<S> {
    fn drop(&mut self) {
        let _ = self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RecordingEngine, RenderEngine};
    use crate::style::ViewerConfig;

    fn config() -> ViewerConfig {
        ViewerConfig {
            background_color: "#050505".to_owned(),
            antialias: true,
        }
    }

    #[test]
    fn replace_disposes_previous() {
        let mut engine = RecordingEngine::new();
        let container = "viewer".to_owned();
        let mut slot = SurfaceSlot::new();

        slot.replace(engine.create_surface(&container, &config()).unwrap());
        slot.replace(engine.create_surface(&container, &config()).unwrap());

        assert!(slot.is_occupied());
        assert_eq!(slot.get().map(|s| s.id()), Some(2));
        assert_eq!(engine.log().created_surfaces(), 2);
        assert_eq!(engine.log().live_surfaces(), 1);
    }

    #[test]
    fn drop_disposes_occupant() {
        let mut engine = RecordingEngine::new();
        {
            let mut slot = SurfaceSlot::new();
            slot.replace(
                engine
                    .create_surface(&"viewer".to_owned(), &config())
                    .unwrap(),
            );
        }
        assert_eq!(engine.log().live_surfaces(), 0);
    }

    #[test]
    fn dispose_empties_slot() {
        let mut engine = RecordingEngine::new();
        let mut slot = SurfaceSlot::new();
        assert!(!slot.dispose());

        slot.replace(
            engine
                .create_surface(&"viewer".to_owned(), &config())
                .unwrap(),
        );
        assert!(slot.dispose());
        assert!(!slot.is_occupied());
        assert_eq!(engine.log().live_surfaces(), 0);
    }
}
