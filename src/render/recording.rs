use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;

use super::{RenderEngine, RenderSurface};
use crate::error::RenderError;
use crate::selection::Selector;
use crate::source::StructureFormat;
use crate::style::{AtomStyle, SurfaceKind, SurfaceStyle, ViewerConfig};

/// One engine call, as seen by the engine.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SceneCommand {
    /// Container emptied.
    ClearContainer {
        /// Container name.
        container: String,
    },
    /// New surface constructed.
    CreateSurface {
        /// Surface serial number.
        surface: u32,
        /// Construction parameters.
        config: ViewerConfig,
    },
    /// Structure text loaded.
    AddModel {
        /// Surface serial number.
        surface: u32,
        /// Engine format tag.
        format: &'static str,
        /// Length of the structure text.
        bytes: usize,
    },
    /// Style rule applied.
    SetStyle {
        /// Surface serial number.
        surface: u32,
        /// Engine selection object.
        selection: Value,
        /// Style rule.
        style: AtomStyle,
    },
    /// Molecular surface attached.
    AddSurface {
        /// Surface serial number.
        surface: u32,
        /// Surface kind.
        kind: SurfaceKind,
        /// Surface appearance.
        style: SurfaceStyle,
        /// Engine selection object.
        selection: Value,
    },
    /// Camera framed.
    ZoomTo {
        /// Surface serial number.
        surface: u32,
        /// Engine selection object.
        selection: Value,
    },
    /// Frame drawn.
    Render {
        /// Surface serial number.
        surface: u32,
    },
    /// Surface released.
    Dispose {
        /// Surface serial number.
        surface: u32,
    },
}

impl SceneCommand {
    /// Short operation name (matches the serialized `op` tag).
    #[must_use]
    pub fn op(&self) -> &'static str {
        match self {
            Self::ClearContainer { .. } => "clear_container",
            Self::CreateSurface { .. } => "create_surface",
            Self::AddModel { .. } => "add_model",
            Self::SetStyle { .. } => "set_style",
            Self::AddSurface { .. } => "add_surface",
            Self::ZoomTo { .. } => "zoom_to",
            Self::Render { .. } => "render",
            Self::Dispose { .. } => "dispose",
        }
    }
}

/// Engine call at which a [`RecordingEngine`] reports failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    /// Module load (`prepare`).
    Prepare,
    /// Surface construction.
    CreateSurface,
    /// Model load.
    AddModel,
    /// Style application.
    SetStyle,
    /// Surface generation.
    AddSurface,
    /// Camera framing.
    ZoomTo,
    /// Frame draw.
    Render,
}

impl FailPoint {
    fn step(self) -> &'static str {
        match self {
            Self::Prepare => "prepare",
            Self::CreateSurface => "createViewer",
            Self::AddModel => "addModel",
            Self::SetStyle => "setStyle",
            Self::AddSurface => "addSurface",
            Self::ZoomTo => "zoomTo",
            Self::Render => "render",
        }
    }

    fn error(self) -> RenderError {
        match self {
            Self::Prepare => {
                RenderError::EngineUnavailable("injected failure".to_owned())
            }
            _ => RenderError::Engine {
                step: self.step(),
                message: "injected failure".to_owned(),
            },
        }
    }
}

#[derive(Debug, Default)]
struct Record {
    commands: Vec<SceneCommand>,
    created: usize,
    live: usize,
}

/// Shared view of everything a [`RecordingEngine`] and its surfaces did.
#[derive(Debug, Clone, Default)]
pub struct SceneLog(Rc<RefCell<Record>>);

impl SceneLog {
    /// All recorded commands, oldest first.
    #[must_use]
    pub fn commands(&self) -> Vec<SceneCommand> {
        self.0.borrow().commands.clone()
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().commands.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Surfaces created and not yet disposed.
    #[must_use]
    pub fn live_surfaces(&self) -> usize {
        self.0.borrow().live
    }

    /// Surfaces created over the engine's lifetime.
    #[must_use]
    pub fn created_surfaces(&self) -> usize {
        self.0.borrow().created
    }

    fn push(&self, command: SceneCommand) {
        self.0.borrow_mut().commands.push(command);
    }
}

/// Headless [`RenderEngine`]: performs no drawing, records every call.
///
/// Containers are plain names. A [`FailPoint`] makes the matching call
/// return an error, for exercising failure paths.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    log: SceneLog,
    fail_at: Option<FailPoint>,
    next_surface: u32,
}

impl RecordingEngine {
    /// Engine that never fails.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the given call fail.
    #[must_use]
    pub fn fail_at(mut self, point: FailPoint) -> Self {
        self.fail_at = Some(point);
        self
    }

    /// Change (or clear) the failure point of an existing engine.
    pub fn set_fail_at(&mut self, point: Option<FailPoint>) {
        self.fail_at = point;
    }

    /// Shared command log.
    #[must_use]
    pub fn log(&self) -> SceneLog {
        self.log.clone()
    }

    fn check(&self, point: FailPoint) -> Result<(), RenderError> {
        if self.fail_at == Some(point) {
            Err(point.error())
        } else {
            Ok(())
        }
    }
}

impl RenderEngine for RecordingEngine {
    type Container = String;
    type Surface = RecordingSurface;
    type Prepare = std::future::Ready<Result<(), RenderError>>;

    fn prepare(&self) -> Self::Prepare {
        std::future::ready(self.check(FailPoint::Prepare))
    }

    fn clear_container(
        &mut self,
        container: &String,
    ) -> Result<(), RenderError> {
        self.log.push(SceneCommand::ClearContainer {
            container: container.clone(),
        });
        Ok(())
    }

    fn create_surface(
        &mut self,
        _container: &String,
        config: &ViewerConfig,
    ) -> Result<RecordingSurface, RenderError> {
        self.check(FailPoint::CreateSurface)?;
        self.next_surface += 1;
        let id = self.next_surface;
        {
            let mut record = self.log.0.borrow_mut();
            record.created += 1;
            record.live += 1;
        }
        self.log.push(SceneCommand::CreateSurface {
            surface: id,
            config: config.clone(),
        });
        Ok(RecordingSurface {
            id,
            log: self.log.clone(),
            fail_at: self.fail_at,
            disposed: false,
        })
    }
}

/// Surface produced by [`RecordingEngine`].
#[derive(Debug)]
pub struct RecordingSurface {
    id: u32,
    log: SceneLog,
    fail_at: Option<FailPoint>,
    disposed: bool,
}

impl RecordingSurface {
    /// Serial number of this surface within its engine.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    fn check(&self, point: FailPoint) -> Result<(), RenderError> {
        if self.disposed {
            return Err(RenderError::Engine {
                step: point.step(),
                message: "surface already disposed".to_owned(),
            });
        }
        if self.fail_at == Some(point) {
            return Err(point.error());
        }
        Ok(())
    }
}

impl RenderSurface for RecordingSurface {
    fn add_model(
        &mut self,
        text: &str,
        format: StructureFormat,
    ) -> Result<(), RenderError> {
        self.check(FailPoint::AddModel)?;
        self.log.push(SceneCommand::AddModel {
            surface: self.id,
            format: format.engine_tag(),
            bytes: text.len(),
        });
        Ok(())
    }

    fn set_style(
        &mut self,
        selector: Selector<'_>,
        style: &AtomStyle,
    ) -> Result<(), RenderError> {
        self.check(FailPoint::SetStyle)?;
        self.log.push(SceneCommand::SetStyle {
            surface: self.id,
            selection: selector.to_spec(),
            style: style.clone(),
        });
        Ok(())
    }

    fn add_surface(
        &mut self,
        kind: SurfaceKind,
        style: &SurfaceStyle,
        selector: Selector<'_>,
    ) -> Result<(), RenderError> {
        self.check(FailPoint::AddSurface)?;
        self.log.push(SceneCommand::AddSurface {
            surface: self.id,
            kind,
            style: style.clone(),
            selection: selector.to_spec(),
        });
        Ok(())
    }

    fn zoom_to(&mut self, selector: Selector<'_>) -> Result<(), RenderError> {
        self.check(FailPoint::ZoomTo)?;
        self.log.push(SceneCommand::ZoomTo {
            surface: self.id,
            selection: selector.to_spec(),
        });
        Ok(())
    }

    fn render(&mut self) -> Result<(), RenderError> {
        self.check(FailPoint::Render)?;
        self.log.push(SceneCommand::Render { surface: self.id });
        Ok(())
    }

    fn dispose(&mut self) -> Result<(), RenderError> {
        if self.disposed {
            return Ok(());
        }
        self.disposed = true;
        self.log.0.borrow_mut().live -= 1;
        self.log.push(SceneCommand::Dispose { surface: self.id });
        Ok(())
    }
}
