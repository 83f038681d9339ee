//! Presentational components. No behavior beyond forwarding the selector.

use dioxus::prelude::*;
use ligview::catalog::{ComplexDescriptor, CATALOG};

/// Page title and introduction for the selected complex.
#[component]
pub fn Header(complex: &'static ComplexDescriptor) -> Element {
    rsx! {
        header { class: "header",
            p { class: "eyebrow", "Binder / Target" }
            h1 { "{complex.binder} bound to {complex.target} (PDB {complex.id})" }
            p { class: "lede",
                "Protein is rendered as a single-color cartoon so the small-molecule \
                 binder {complex.binder} ({complex.ligand_label}) stands out. Drag to \
                 rotate, scroll or pinch to zoom."
            }
        }
    }
}

/// Dropdown over the catalog, keyed by PDB id.
#[component]
#[allow(unused_qualifications)]
pub fn ComplexSelector(
    selected: &'static str,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "selector",
            label { r#for: "complex-select", "Complex " }
            select {
                id: "complex-select",
                value: "{selected}",
                onchange: move |evt: Event<FormData>| on_select.call(evt.value()),
                for complex in CATALOG {
                    option {
                        value: "{complex.id}",
                        selected: complex.id == selected,
                        "{complex.label}"
                    }
                }
            }
        }
    }
}

/// Loading and error overlays.
#[component]
pub fn Status(is_loading: bool, error: Option<String>) -> Element {
    if let Some(message) = error {
        return rsx! {
            div { class: "status error",
                p { "We ran into an issue loading the structure." }
                code { "{message}" }
            }
        };
    }
    if is_loading {
        return rsx! {
            div { class: "status loading", "Loading structure from the PDB..." }
        };
    }
    rsx! {}
}

/// "What are we looking at?" panel.
#[component]
pub fn Details(complex: &'static ComplexDescriptor) -> Element {
    rsx! {
        section { class: "details-panel",
            h2 { "What are we looking at?" }
            ul {
                li {
                    strong { "Target: " }
                    "{complex.target}. {complex.summary}"
                }
                li {
                    strong { "Binder: " }
                    "{complex.binder} (residue code {complex.ligand_label})."
                }
                li {
                    strong { "Representation: " }
                    "Monochrome cartoon for the protein so the ligand pops in \
                     bright sticks and spheres, plus a translucent surface to \
                     emphasize the binding pocket."
                }
            }
        }
    }
}
