//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! only shared resource is the outbound backend client — there is no
//! database, session store, or per-request bookkeeping.

use std::sync::Arc;

use crate::backend::ComplianceBackend;

/// Shared application state. Clone is required by Axum — the backend client
/// is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn ComplianceBackend>,
}

impl AppState {
    #[must_use]
    pub fn new(backend: Arc<dyn ComplianceBackend>) -> Self {
        Self { backend }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
