//! Dioxus web app for the ligview complex viewer.
//!
//! Compiled to WASM with trunk. The page owns one [`session::Session`],
//! created once the viewer container is in the DOM and torn down when the
//! app unmounts.

mod panels;
mod session;

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use ligview::options::Options;
use ligview::viewer::LoadState;

use crate::session::Session;

/// DOM id of the element the rendering engine draws into.
const VIEWER_ID: &str = "ligview-viewer";

fn main() {
    ligview::init_web_logging();
    launch(app);
}

fn app() -> Element {
    let state: Signal<LoadState> = use_signal(LoadState::default);
    let session = use_hook(|| Rc::new(RefCell::new(None::<Session>)));

    // Attach once the viewer container exists.
    let attach_slot = session.clone();
    let _ = use_effect(move || {
        if attach_slot.borrow().is_some() {
            return;
        }
        match Session::attach(VIEWER_ID, Options::default(), state) {
            Ok(s) => {
                s.start();
                *attach_slot.borrow_mut() = Some(s);
            }
            Err(e) => log::error!("cannot attach viewer: {e}"),
        }
    });

    let drop_slot = session.clone();
    use_drop(move || {
        if let Some(s) = drop_slot.borrow_mut().take() {
            s.detach();
        }
    });

    let select_slot = session;
    let on_select = move |id: String| {
        if let Some(s) = select_slot.borrow().as_ref() {
            s.select(&id);
        }
    };

    let current = state.read().clone();
    let viewer_class = if current.error.is_some() {
        "viewer hidden"
    } else {
        "viewer"
    };

    rsx! {
        main { class: "page",
            panels::Header { complex: current.selected }
            panels::ComplexSelector {
                selected: current.selected.id,
                on_select: on_select,
            }
            section { class: "viewer-panel",
                panels::Status {
                    is_loading: current.is_loading,
                    error: current.error.clone(),
                }
                div {
                    id: VIEWER_ID,
                    class: "{viewer_class}",
                    "aria-label": "3D viewer for the {current.selected.binder} complex",
                }
            }
            panels::Details { complex: current.selected }
        }
    }
}
