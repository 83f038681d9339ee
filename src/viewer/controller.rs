use super::slot::SurfaceSlot;
use super::state::{LoadState, LoadTicket};
use crate::catalog::{self, ComplexDescriptor};
use crate::error::LigviewError;
use crate::options::Options;
use crate::render::{RenderAdapter, RenderEngine};

/// Result of handing a finished attempt to [`ViewController::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The scene was built and is now displayed.
    Applied,
    /// The attempt failed; `LoadState::error` holds the message.
    Failed,
    /// The ticket was superseded; nothing changed.
    Stale,
}

/// Owns the load state, the drawing container and its single live surface.
///
/// All mutation goes through `&mut self`, so in a single-threaded UI the
/// controller lives in a `RefCell` shared between event handlers and the
/// in-flight [`drive_load`](super::drive_load) future.
pub struct ViewController<E: RenderEngine> {
    engine: E,
    container: E::Container,
    adapter: RenderAdapter,
    state: LoadState,
    generation: u64,
    mounted: bool,
    slot: SurfaceSlot<E::Surface>,
}

impl<E: RenderEngine> ViewController<E> {
    /// Controller drawing into `container`. Nothing is loaded until
    /// [`mount`](Self::mount).
    #[must_use]
    pub fn new(engine: E, container: E::Container, options: Options) -> Self {
        Self {
            engine,
            container,
            adapter: RenderAdapter::new(options),
            state: LoadState::default(),
            generation: 0,
            mounted: false,
            slot: SurfaceSlot::new(),
        }
    }

    /// Current load state.
    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The rendering engine.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Options scenes are built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        self.adapter.options()
    }

    /// Whether a scene is currently displayed.
    #[must_use]
    pub fn has_surface(&self) -> bool {
        self.slot.is_occupied()
    }

    /// The displayed surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&E::Surface> {
        self.slot.get()
    }

    /// Whether the view is mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether completions for `ticket` would still be applied.
    #[must_use]
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.mounted && ticket.generation == self.generation
    }

    /// Attach the view and start loading the selected complex.
    pub fn mount(&mut self) -> LoadTicket {
        self.mounted = true;
        self.begin(self.state.selected)
    }

    /// Switch to `complex` and start loading it, superseding any attempt in
    /// flight. Re-selecting the current complex reloads it.
    ///
    /// Before mount this only records the selection and returns `None`.
    /// Descriptors that are not [`CATALOG`](catalog::CATALOG) entries are
    /// ignored.
    pub fn select(
        &mut self,
        complex: &'static ComplexDescriptor,
    ) -> Option<LoadTicket> {
        if !catalog::contains(complex) {
            log::warn!("ignoring selection of {} outside the catalog", complex.id);
            return None;
        }
        if !self.mounted {
            self.state.selected = complex;
            return None;
        }
        Some(self.begin(complex))
    }

    /// [`select`](Self::select) by PDB identifier. Unknown identifiers are
    /// ignored.
    pub fn select_id(&mut self, id: &str) -> Option<LoadTicket> {
        let Some(complex) = catalog::find(id) else {
            log::warn!("ignoring selection of unknown complex {id:?}");
            return None;
        };
        self.select(complex)
    }

    /// Apply the outcome of the attempt identified by `ticket`.
    ///
    /// Stale tickets are dropped without touching state, container or
    /// surface. Otherwise structure text is handed to the render adapter and
    /// the resulting surface displayed; any error becomes the user-visible
    /// message.
    pub fn finish(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<String, LigviewError>,
    ) -> Completion {
        if !self.is_current(&ticket) {
            log::warn!(
                "dropping stale completion for {} (generation {}, current {})",
                ticket.complex.id,
                ticket.generation,
                self.generation
            );
            return Completion::Stale;
        }

        let presented = match outcome {
            Ok(text) => self
                .adapter
                .present(&mut self.engine, &self.container, &text, ticket.complex)
                .map_err(LigviewError::from),
            Err(e) => Err(e),
        };

        self.state.is_loading = false;
        match presented {
            Ok(surface) => {
                self.slot.replace(surface);
                self.state.error = None;
                log::info!("displaying {}", ticket.complex.id);
                Completion::Applied
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", ticket.complex.id);
                self.state.error = Some(e.to_string());
                Completion::Failed
            }
        }
    }

    /// Detach the view: invalidate the attempt in flight and dispose the
    /// displayed surface.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation = self.generation.wrapping_add(1);
        if self.slot.dispose() {
            log::debug!("disposed surface on unmount");
        }
    }

    fn begin(&mut self, complex: &'static ComplexDescriptor) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        if self.slot.dispose() {
            log::debug!("disposed previous surface");
        }
        self.state.selected = complex;
        self.state.is_loading = true;
        self.state.error = None;
        log::info!(
            "loading {} (generation {})",
            complex.id,
            self.generation
        );
        LoadTicket {
            generation: self.generation,
            complex,
        }
    }
}
