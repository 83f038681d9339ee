//! Crate-level error types.

use std::fmt;

/// Failure while retrieving structure text from the remote repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The repository answered with a non-success status.
    Status {
        /// Structure identifier that was requested.
        id: String,
        /// HTTP status code of the response.
        status: u16,
    },
    /// The request never produced a response (DNS, TLS, connection reset,
    /// CORS rejection, ...).
    Transport {
        /// Structure identifier that was requested.
        id: String,
        /// Transport-level description of the failure.
        message: String,
    },
    /// The response arrived but its body could not be read as text.
    Body {
        /// Structure identifier that was requested.
        id: String,
        /// Description of the read failure.
        message: String,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { id, status } => {
                write!(f, "Unable to fetch PDB {id} (HTTP {status})")
            }
            Self::Transport { id, message } => {
                write!(f, "Unable to fetch PDB {id}: {message}")
            }
            Self::Body { id, message } => {
                write!(f, "Unable to read PDB {id}: {message}")
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Failure while building a scene inside the rendering engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Structure text was empty; nothing to load.
    EmptyStructure,
    /// The engine module could not be loaded or is not present.
    EngineUnavailable(String),
    /// An engine call failed part-way through scene construction.
    Engine {
        /// Engine operation that failed (e.g. `"addModel"`).
        step: &'static str,
        /// Message reported by the engine.
        message: String,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStructure => write!(f, "structure text is empty"),
            Self::EngineUnavailable(msg) => {
                write!(f, "rendering engine unavailable: {msg}")
            }
            Self::Engine { step, message } => {
                write!(f, "rendering failed during {step}: {message}")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Errors produced by the ligview crate.
#[derive(Debug)]
pub enum LigviewError {
    /// Structure retrieval failure.
    Fetch(FetchError),
    /// Scene construction failure.
    Render(RenderError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for LigviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Fetch and render messages are surfaced verbatim to the user.
            Self::Fetch(e) => write!(f, "{e}"),
            Self::Render(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for LigviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(e) => Some(e),
            Self::Render(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<FetchError> for LigviewError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

impl From<RenderError> for LigviewError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

impl From<std::io::Error> for LigviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_the_structure() {
        let err = FetchError::Status {
            id: "1OPJ".to_owned(),
            status: 404,
        };
        assert_eq!(err.to_string(), "Unable to fetch PDB 1OPJ (HTTP 404)");
    }

    #[test]
    fn wrapped_errors_display_verbatim() {
        let fetch = FetchError::Transport {
            id: "1M17".to_owned(),
            message: "connection refused".to_owned(),
        };
        let wrapped = LigviewError::from(fetch.clone());
        assert_eq!(wrapped.to_string(), fetch.to_string());

        let render = RenderError::Engine {
            step: "addModel",
            message: "bad record".to_owned(),
        };
        let wrapped = LigviewError::from(render.clone());
        assert_eq!(wrapped.to_string(), render.to_string());
    }
}
