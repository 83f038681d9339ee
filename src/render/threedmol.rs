//! 3Dmol.js binding for the browser build.
//!
//! The engine is reached through the global `$3Dmol` namespace with
//! `js_sys::Reflect`, so no bundler-side import is needed; [`prepare`]
//! injects the 3Dmol `<script>` tag on first use.
//!
//! [`prepare`]: super::RenderEngine::prepare

use std::future::Future;
use std::pin::Pin;

use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlScriptElement};

use super::{js_message, RenderEngine, RenderSurface};
use crate::error::RenderError;
use crate::selection::Selector;
use crate::source::StructureFormat;
use crate::style::{AtomStyle, SurfaceKind, SurfaceStyle, ViewerConfig};

/// Default location of the minified 3Dmol.js bundle.
pub(super) const DEFAULT_SCRIPT_URL: &str = "https://3Dmol.org/build/3Dmol-min.js";

const NAMESPACE: &str = "$3Dmol";
const SCRIPT_ID: &str = "ligview-3dmol";

/// 3Dmol.js-backed [`RenderEngine`]. Containers are DOM elements.
#[derive(Debug, Clone)]
pub struct ThreeDmolEngine {
    script_url: String,
}

impl Default for ThreeDmolEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPT_URL)
    }
}

impl ThreeDmolEngine {
    /// Engine that loads 3Dmol.js from `script_url` when needed.
    #[must_use]
    pub fn new(script_url: &str) -> Self {
        Self {
            script_url: script_url.to_owned(),
        }
    }
}

impl RenderEngine for ThreeDmolEngine {
    type Container = Element;
    type Surface = ThreeDmolSurface;
    type Prepare = Pin<Box<dyn Future<Output = Result<(), RenderError>>>>;

    fn prepare(&self) -> Self::Prepare {
        let url = self.script_url.clone();
        Box::pin(async move { ensure_loaded(&url).await })
    }

    fn clear_container(
        &mut self,
        container: &Element,
    ) -> Result<(), RenderError> {
        container.set_inner_html("");
        Ok(())
    }

    fn create_surface(
        &mut self,
        container: &Element,
        config: &ViewerConfig,
    ) -> Result<ThreeDmolSurface, RenderError> {
        let ns = namespace()?;
        let viewer = call(
            &ns,
            "createViewer",
            &[JsValue::from(container.clone()), to_js("createViewer", config)?],
        )?;
        let surface_types = Reflect::get(&ns, &JsValue::from_str("SurfaceType"))
            .map_err(|e| engine_err("SurfaceType", &e))?;
        Ok(ThreeDmolSurface {
            viewer,
            surface_types,
        })
    }
}

/// Live `GLViewer` instance.
#[derive(Debug)]
pub struct ThreeDmolSurface {
    viewer: JsValue,
    surface_types: JsValue,
}

impl RenderSurface for ThreeDmolSurface {
    fn add_model(
        &mut self,
        text: &str,
        format: StructureFormat,
    ) -> Result<(), RenderError> {
        let _ = call(
            &self.viewer,
            "addModel",
            &[JsValue::from_str(text), JsValue::from_str(format.engine_tag())],
        )?;
        Ok(())
    }

    fn set_style(
        &mut self,
        selector: Selector<'_>,
        style: &AtomStyle,
    ) -> Result<(), RenderError> {
        let _ = call(
            &self.viewer,
            "setStyle",
            &[
                to_js("setStyle", &selector.to_spec())?,
                to_js("setStyle", style)?,
            ],
        )?;
        Ok(())
    }

    fn add_surface(
        &mut self,
        kind: SurfaceKind,
        style: &SurfaceStyle,
        selector: Selector<'_>,
    ) -> Result<(), RenderError> {
        let kind_value =
            Reflect::get(&self.surface_types, &JsValue::from_str(kind.engine_key()))
                .map_err(|e| engine_err("addSurface", &e))?;
        let _ = call(
            &self.viewer,
            "addSurface",
            &[
                kind_value,
                to_js("addSurface", style)?,
                to_js("addSurface", &selector.to_spec())?,
            ],
        )?;
        Ok(())
    }

    fn zoom_to(&mut self, selector: Selector<'_>) -> Result<(), RenderError> {
        let _ = call(
            &self.viewer,
            "zoomTo",
            &[to_js("zoomTo", &selector.to_spec())?],
        )?;
        Ok(())
    }

    fn render(&mut self) -> Result<(), RenderError> {
        let _ = call(&self.viewer, "render", &[])?;
        Ok(())
    }

    fn dispose(&mut self) -> Result<(), RenderError> {
        let _ = call(&self.viewer, "clear", &[])?;
        Ok(())
    }
}

/// Next step for getting `$3Dmol` defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptPlan {
    /// The namespace is already defined.
    Ready,
    /// Our script element is in the document and still loading.
    Await,
    /// No script element; add a fresh one.
    Inject,
}

/// Failed loads remove their script element, so an element that is still
/// present without a namespace is one whose events have not fired yet.
const fn plan_script(namespace_defined: bool, script_present: bool) -> ScriptPlan {
    if namespace_defined {
        ScriptPlan::Ready
    } else if script_present {
        ScriptPlan::Await
    } else {
        ScriptPlan::Inject
    }
}

/// Load 3Dmol.js unless `$3Dmol` is already defined.
async fn ensure_loaded(url: &str) -> Result<(), RenderError> {
    let unavailable = RenderError::EngineUnavailable;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| unavailable("no document".to_owned()))?;
    let existing = document.get_element_by_id(SCRIPT_ID);

    let script: HtmlScriptElement =
        match plan_script(namespace().is_ok(), existing.is_some()) {
            ScriptPlan::Ready => return Ok(()),
            ScriptPlan::Await => existing
                .ok_or_else(|| unavailable(format!("#{SCRIPT_ID} vanished")))?
                .dyn_into()
                .map_err(|_| unavailable(format!("#{SCRIPT_ID} is not a script")))?,
            ScriptPlan::Inject => inject_script(&document, url)?,
        };

    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        let _ = script.add_event_listener_with_callback("load", &resolve);
        let _ = script.add_event_listener_with_callback("error", &reject);
    });
    let outcome = match JsFuture::from(loaded).await {
        Ok(_) => namespace().map(|_| ()),
        Err(_) => Err(unavailable(format!("failed to load {url}"))),
    };
    if outcome.is_err() {
        // Leave nothing behind so the next attempt injects a fresh element.
        script.remove();
        log::warn!("removed #{SCRIPT_ID} after a failed load of {url}");
    }
    outcome
}

fn inject_script(
    document: &web_sys::Document,
    url: &str,
) -> Result<HtmlScriptElement, RenderError> {
    let unavailable = RenderError::EngineUnavailable;
    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|e| unavailable(js_message(&e)))?
        .dyn_into()
        .map_err(|_| unavailable("not a script element".to_owned()))?;
    script.set_id(SCRIPT_ID);
    script.set_src(url);
    let head = document
        .head()
        .ok_or_else(|| unavailable("no document head".to_owned()))?;
    let _ = head
        .append_child(&script)
        .map_err(|e| unavailable(js_message(&e)))?;
    Ok(script)
}

fn namespace() -> Result<JsValue, RenderError> {
    let ns = Reflect::get(&js_sys::global(), &JsValue::from_str(NAMESPACE))
        .map_err(|e| RenderError::EngineUnavailable(js_message(&e)))?;
    if ns.is_undefined() || ns.is_null() {
        return Err(RenderError::EngineUnavailable(format!(
            "{NAMESPACE} is not loaded"
        )));
    }
    Ok(ns)
}

fn call(
    target: &JsValue,
    method: &'static str,
    args: &[JsValue],
) -> Result<JsValue, RenderError> {
    let function: Function = Reflect::get(target, &JsValue::from_str(method))
        .map_err(|e| engine_err(method, &e))?
        .dyn_into()
        .map_err(|_| RenderError::Engine {
            step: method,
            message: "not a function".to_owned(),
        })?;
    let args: Array = args.iter().collect();
    function
        .apply(target, &args)
        .map_err(|e| engine_err(method, &e))
}

fn to_js<T: Serialize>(
    step: &'static str,
    value: &T,
) -> Result<JsValue, RenderError> {
    let json = serde_json::to_string(value).map_err(|e| RenderError::Engine {
        step,
        message: e.to_string(),
    })?;
    js_sys::JSON::parse(&json).map_err(|e| engine_err(step, &e))
}

fn engine_err(step: &'static str, value: &JsValue) -> RenderError {
    RenderError::Engine {
        step,
        message: js_message(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defined_namespace_needs_no_script() {
        assert_eq!(plan_script(true, false), ScriptPlan::Ready);
        assert_eq!(plan_script(true, true), ScriptPlan::Ready);
    }

    #[test]
    fn pending_script_is_awaited() {
        assert_eq!(plan_script(false, true), ScriptPlan::Await);
    }

    #[test]
    fn retry_after_failed_load_injects_again() {
        // A failed load removes its element before reporting the error.
        assert_eq!(plan_script(false, false), ScriptPlan::Inject);
    }

    #[test]
    fn default_engine_uses_bundled_url() {
        let engine = ThreeDmolEngine::default();
        assert_eq!(engine.script_url, DEFAULT_SCRIPT_URL);
    }
}
