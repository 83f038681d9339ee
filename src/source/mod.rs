//! Structure retrieval from the public repository.
//!
//! A [`StructureSource`] turns a PDB identifier into the raw text of its
//! structure file. The native build uses [`RcsbSource`] (blocking `ureq`);
//! the browser build uses [`BrowserSource`] (`window.fetch`).

#[cfg(feature = "native")]
mod rcsb;
#[cfg(feature = "web")]
mod web;

use std::future::Future;

#[cfg(feature = "native")]
pub use rcsb::RcsbSource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
#[cfg(feature = "web")]
pub use web::BrowserSource;

use crate::error::FetchError;

/// Textual coordinate format requested from the repository.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum StructureFormat {
    /// Legacy fixed-column PDB format.
    #[default]
    Pdb,
    /// PDBx/mmCIF.
    Cif,
}

impl StructureFormat {
    /// File extension used in download URLs.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdb => "pdb",
            Self::Cif => "cif",
        }
    }

    /// Format tag passed to the rendering engine's model loader.
    #[must_use]
    pub fn engine_tag(self) -> &'static str {
        match self {
            Self::Pdb => "pdb",
            Self::Cif => "mmcif",
        }
    }
}

/// Download URL for a structure: `<base>/<ID>.<ext>`.
#[must_use]
pub fn structure_url(base: &str, id: &str, format: StructureFormat) -> String {
    format!(
        "{}/{}.{}",
        base.trim_end_matches('/'),
        id.trim().to_uppercase(),
        format.extension()
    )
}

/// Anything that can produce structure text for an identifier.
///
/// A single request per call, no retries. Implementations report
/// non-success statuses as [`FetchError::Status`].
pub trait StructureSource {
    /// Fetch the full structure text for `id`.
    fn fetch(&self, id: &str) -> impl Future<Output = Result<String, FetchError>>;
}
