//! Native structure downloads over `ureq`.

use std::time::Duration;

use ureq::Agent;

use super::{structure_url, StructureSource};
use crate::error::FetchError;
use crate::options::SourceOptions;

/// Blocking RCSB client. The returned future is ready as soon as the
/// request finishes; intended for native tooling, not the browser.
pub struct RcsbSource {
    agent: Agent,
    options: SourceOptions,
}

impl RcsbSource {
    /// Build a client from source options.
    #[must_use]
    pub fn new(options: &SourceOptions) -> Self {
        let config = Agent::config_builder()
            .timeout_global(options.timeout_secs.map(Duration::from_secs))
            .build();
        Self {
            agent: config.into(),
            options: options.clone(),
        }
    }

    fn fetch_blocking(&self, id: &str) -> Result<String, FetchError> {
        let url = structure_url(&self.options.base_url, id, self.options.format);
        let id = id.trim().to_uppercase();
        log::info!("Downloading {id} from {url}");

        let response = self.agent.get(url.as_str()).call().map_err(|e| match e {
            ureq::Error::StatusCode(status) => FetchError::Status {
                id: id.clone(),
                status,
            },
            other => FetchError::Transport {
                id: id.clone(),
                message: other.to_string(),
            },
        })?;

        response
            .into_body()
            .read_to_string()
            .map_err(|e| FetchError::Body {
                id,
                message: e.to_string(),
            })
    }
}

impl StructureSource for RcsbSource {
    fn fetch(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<String, FetchError>> {
        std::future::ready(self.fetch_blocking(id))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    use pollster::block_on;

    use super::*;
    use crate::options::Options;
    use crate::render::RecordingEngine;
    use crate::viewer::{drive_load, Completion, ViewController};

    /// Serve one canned HTTP response; the handle yields the request line.
    fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut request_line = String::new();
            let _ = reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                let _ = reader.read_line(&mut header).unwrap();
                if header.trim().is_empty() {
                    break;
                }
            }
            let mut stream = reader.into_inner();
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            request_line.trim().to_owned()
        });
        (base, handle)
    }

    fn source(base_url: String) -> RcsbSource {
        RcsbSource::new(&SourceOptions {
            base_url,
            ..SourceOptions::default()
        })
    }

    #[test]
    fn success_returns_body_from_upper_case_url() {
        let (base, server) = serve_once("200 OK", "HETATM x");

        let text = source(base).fetch_blocking("1opj").unwrap();

        assert_eq!(text, "HETATM x");
        assert_eq!(server.join().unwrap(), "GET /1OPJ.pdb HTTP/1.1");
    }

    #[test]
    fn not_found_maps_to_status_error() {
        let (base, server) = serve_once("404 Not Found", "");

        let err = source(base).fetch_blocking("1opj").unwrap_err();

        assert_eq!(
            err,
            FetchError::Status {
                id: "1OPJ".to_owned(),
                status: 404,
            }
        );
        assert_eq!(err.to_string(), "Unable to fetch PDB 1OPJ (HTTP 404)");
        let _ = server.join().unwrap();
    }

    #[test]
    fn refused_connection_maps_to_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = source(base).fetch_blocking("1OPJ").unwrap_err();

        assert!(
            matches!(err, FetchError::Transport { ref id, .. } if id == "1OPJ"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn server_error_leaves_view_without_surface() {
        let (base, server) = serve_once("500 Internal Server Error", "");
        let view = RefCell::new(ViewController::new(
            RecordingEngine::new(),
            "viewer".to_owned(),
            Options::default(),
        ));
        let log = view.borrow().engine().log();
        let ticket = view.borrow_mut().mount();

        let completion = block_on(drive_load(&view, &source(base), ticket));

        assert_eq!(completion, Completion::Failed);
        let view = view.borrow();
        assert!(!view.state().is_loading);
        assert_eq!(
            view.state().error.as_deref(),
            Some("Unable to fetch PDB 1OPJ (HTTP 500)")
        );
        assert!(!view.has_surface());
        assert_eq!(log.created_surfaces(), 0);
        let _ = server.join().unwrap();
    }
}
