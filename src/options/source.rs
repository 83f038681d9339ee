use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::source::StructureFormat;

/// Where structure files come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Source", inline)]
#[serde(default)]
pub struct SourceOptions {
    /// Download endpoint; files are requested as `<base_url>/<ID>.<ext>`.
    #[schemars(title = "Base URL")]
    pub base_url: String,
    /// File format to request and load.
    #[schemars(title = "Format")]
    pub format: StructureFormat,
    /// Whole-request timeout for native downloads. Unset means the
    /// transport's own limits apply.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            base_url: "https://files.rcsb.org/download".to_owned(),
            format: StructureFormat::Pdb,
            timeout_secs: None,
        }
    }
}
