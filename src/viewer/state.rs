use crate::catalog::{default_complex, ComplexDescriptor};

/// What the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadState {
    /// Complex currently in effect (always a catalog member).
    pub selected: &'static ComplexDescriptor,
    /// A load attempt is in flight.
    pub is_loading: bool,
    /// Message of the last failed attempt, if it failed.
    pub error: Option<String>,
}

impl Default for LoadState {
    fn default() -> Self {
        Self {
            selected: default_complex(),
            is_loading: true,
            error: None,
        }
    }
}

impl LoadState {
    /// Whether the last attempt succeeded and nothing is pending.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.is_loading && self.error.is_none()
    }
}

/// Identifies one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub(crate) generation: u64,
    /// Complex this attempt loads.
    pub complex: &'static ComplexDescriptor,
}

impl LoadTicket {
    /// Generation the ticket was issued for.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
