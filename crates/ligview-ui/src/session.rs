//! Glue between the Dioxus app and the ligview state machine.
//!
//! The controller lives in an `Rc<RefCell<_>>` shared by event handlers and
//! spawned load tasks. After every transition the controller's
//! [`LoadState`] is copied into a signal so the page re-renders.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use ligview::options::Options;
use ligview::render::ThreeDmolEngine;
use ligview::source::BrowserSource;
use ligview::viewer::{drive_load, LoadState, LoadTicket, ViewController};

/// One mounted viewer.
#[derive(Clone)]
pub struct Session {
    view: Rc<RefCell<ViewController<ThreeDmolEngine>>>,
    source: Rc<BrowserSource>,
    state: Signal<LoadState>,
}

impl Session {
    /// Bind a controller to the element with DOM id `container_id`.
    pub fn attach(
        container_id: &str,
        options: Options,
        state: Signal<LoadState>,
    ) -> Result<Self, String> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(container_id))
            .ok_or_else(|| format!("no element with id {container_id:?}"))?;

        let source = BrowserSource::new(&options.source);
        let view = ViewController::new(ThreeDmolEngine::default(), element, options);
        Ok(Self {
            view: Rc::new(RefCell::new(view)),
            source: Rc::new(source),
            state,
        })
    }

    /// Mount the view and load the default complex.
    pub fn start(&self) {
        let ticket = self.view.borrow_mut().mount();
        self.run(ticket);
    }

    /// Switch to the complex with PDB id `id`.
    pub fn select(&self, id: &str) {
        let ticket = self.view.borrow_mut().select_id(id);
        if let Some(ticket) = ticket {
            self.run(ticket);
        }
    }

    /// Tear the view down, disposing the displayed scene.
    pub fn detach(&self) {
        self.view.borrow_mut().unmount();
    }

    fn run(&self, ticket: LoadTicket) {
        self.publish();
        let this = self.clone();
        let _ = spawn(async move {
            let _ = drive_load(this.view.as_ref(), this.source.as_ref(), ticket).await;
            this.publish();
        });
    }

    fn publish(&self) {
        let snapshot = self.view.borrow().state().clone();
        let mut state = self.state;
        if *state.peek() != snapshot {
            state.set(snapshot);
        }
    }
}
