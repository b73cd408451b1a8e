//! diagnostic taxonomy for the view core
//!
//! This layer never propagates errors: absent-object conditions (no
//! controller, no window, failed downcast) are ordinary `None`/empty
//! results. What remains are diagnostics, reported through `tracing` with a
//! severity fixed per class.

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Diagnostic {
    /// Programming error: the sanctioned teardown entry point was invoked a
    /// second time on the same view.
    #[error("free() called twice on view {0}")]
    DoubleFree(String),

    /// Capability gap: the active backend does not implement an optional
    /// contract point. The caller receives a safe default instead.
    #[error("{0} is not implemented by this backend")]
    Unsupported(&'static str),
}

impl Diagnostic {
    pub fn report(&self) {
        match self {
            Diagnostic::DoubleFree(_) => warn!("{self}"),
            Diagnostic::Unsupported(_) => debug!("{self}"),
        }
    }
}
