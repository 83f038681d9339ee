//! Browser structure downloads through `window.fetch`.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::{structure_url, StructureSource};
use crate::error::FetchError;
use crate::options::SourceOptions;
use crate::render::js_message;

/// `fetch`-backed source for the wasm build.
#[derive(Debug, Clone)]
pub struct BrowserSource {
    options: SourceOptions,
}

impl BrowserSource {
    /// Build a source from source options.
    #[must_use]
    pub fn new(options: &SourceOptions) -> Self {
        Self {
            options: options.clone(),
        }
    }
}

impl StructureSource for BrowserSource {
    fn fetch(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<String, FetchError>> {
        let url = structure_url(&self.options.base_url, id, self.options.format);
        let id = id.trim().to_uppercase();
        async move {
            let transport = |message: String| FetchError::Transport {
                id: id.clone(),
                message,
            };

            let window = web_sys::window()
                .ok_or_else(|| transport("no global window".to_owned()))?;
            let response: Response =
                JsFuture::from(window.fetch_with_str(&url))
                    .await
                    .map_err(|e| transport(js_message(&e)))?
                    .dyn_into()
                    .map_err(|e| transport(js_message(&e)))?;

            if !response.ok() {
                return Err(FetchError::Status {
                    id,
                    status: response.status(),
                });
            }

            let body_err = |message: String| FetchError::Body {
                id: id.clone(),
                message,
            };
            let text = response.text().map_err(|e| body_err(js_message(&e)))?;
            JsFuture::from(text)
                .await
                .map_err(|e| body_err(js_message(&e)))?
                .as_string()
                .ok_or_else(|| body_err("response body is not text".to_owned()))
        }
    }
}
