// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Binder/target complex viewer.
//!
//! Ligview fetches a structure from the RCSB Protein Data Bank and hands it
//! to an external 3D engine (3Dmol.js in the browser), drawing the protein
//! as a plain backdrop and the bound small molecule as vivid sticks inside a
//! translucent surface.
//!
//! # Key entry points
//!
//! - [`catalog::CATALOG`] - the curated complexes
//! - [`viewer::ViewController`] - the structure-loading state machine
//! - [`viewer::drive_load`] - runs one load attempt end to end
//! - [`render::RenderAdapter`] - builds the scene on a [`render::RenderEngine`]
//! - [`options::Options`] - styling and source configuration
//!
//! # Architecture
//!
//! Everything runs on one thread. The controller hands out a
//! [`viewer::LoadTicket`] per attempt and bumps a generation counter on
//! every selection change and on teardown; completions carrying an old
//! generation are discarded. At most one rendering surface is alive per
//! view and it is disposed before any replacement is built.

pub mod catalog;
pub mod error;
pub mod options;
pub mod render;
pub mod selection;
pub mod source;
pub mod style;
pub mod viewer;

/// Route `log` output to the browser console and panics to `console.error`.
///
/// Safe to call more than once; later calls keep the first logger.
#[cfg(feature = "web")]
pub fn init_web_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}
